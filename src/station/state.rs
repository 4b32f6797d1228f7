//! Rolling station state built from partial samples.
//!
//! Each Tempest message carries a different subset of the station readings.
//! [`StationState`] holds the union of all of them and is updated field by
//! field as samples arrive, in arrival order. A late sample overwrites a
//! fresher value for the fields it carries; timestamps are not compared.

use super::payload::info::{PrecipitationType, Sample};
use super::payload::units::{celsius_to_fahrenheit, compass_octant};
use super::super::Timestamp;
use chrono::prelude::*;
use chrono::serde::ts_seconds_option;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct StationState {
    #[serde(with = "ts_seconds_option")]
    pub timestamp: Option<Timestamp>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_lull: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub pressure: Option<f64>,
    pub air_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub lightning_strike_count: Option<i64>,
    pub lightning_strike_avg_distance: Option<f64>,
    pub illuminance: Option<f64>,
    pub uv_index: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub rain_accumulated_last_minute: Option<f64>,
    pub rain_accumulated_today: Option<f64>,
    pub precipitation_type: Option<PrecipitationType>,
}

impl StationState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new state with every field carried by `sample` overwritten.
    pub fn update(&self, sample: &Sample) -> Self {
        let mut next = self.clone();
        next.apply(sample);
        next
    }

    pub fn apply(&mut self, sample: &Sample) {
        match sample {
            Sample::RapidWind(s) => {
                self.timestamp = Some(s.timestamp);
                self.wind_speed = Some(s.wind_speed);
                self.wind_direction = Some(s.wind_direction);
            }
            Sample::Air(s) => {
                self.timestamp = Some(s.timestamp);
                self.pressure = Some(s.pressure);
                self.air_temperature = Some(s.air_temperature);
                self.relative_humidity = Some(s.relative_humidity);
                self.lightning_strike_count = Some(s.lightning_strike_count);
                self.lightning_strike_avg_distance = Some(s.lightning_strike_avg_distance);
            }
            Sample::Sky(s) => {
                self.timestamp = Some(s.timestamp);
                self.illuminance = Some(s.illuminance);
                self.uv_index = Some(s.uv_index);
                self.rain_accumulated_last_minute = Some(s.rain_accumulated_last_minute);
                self.wind_lull = Some(s.wind_lull);
                self.wind_avg = Some(s.wind_avg);
                self.wind_gust = Some(s.wind_gust);
                self.wind_direction = Some(s.wind_direction);
                self.solar_radiation = Some(s.solar_radiation);
                // null on the wire is carried over as well
                self.rain_accumulated_today = s.rain_accumulated_today;
                self.precipitation_type = Some(s.precipitation_type);
            }
            Sample::Station(s) => {
                self.timestamp = Some(s.timestamp);
                self.wind_lull = Some(s.wind_lull);
                self.wind_avg = Some(s.wind_avg);
                self.wind_gust = Some(s.wind_gust);
                self.wind_direction = Some(s.wind_direction);
                self.pressure = Some(s.pressure);
                self.air_temperature = Some(s.air_temperature);
                self.relative_humidity = Some(s.relative_humidity);
                self.illuminance = Some(s.illuminance);
                self.uv_index = Some(s.uv_index);
                self.solar_radiation = Some(s.solar_radiation);
                self.rain_accumulated_last_minute = Some(s.rain_accumulated_last_minute);
                self.precipitation_type = Some(s.precipitation_type);
                self.lightning_strike_count = Some(s.lightning_strike_count);
                self.lightning_strike_avg_distance = Some(s.lightning_strike_avg_distance);
            }
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            air_temp: self.air_temperature.map(celsius_to_fahrenheit),
            pressure: self.pressure,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            wind_direction_name: self
                .wind_direction
                .and_then(compass_octant)
                .map(|octant| octant.long_name()),
            timestamp: self
                .timestamp
                .and_then(|t| t.with_second(0))
                .and_then(|t| t.with_nanosecond(0))
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

// Compact view of the station for display clients
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub air_temp: Option<f64>, // Fahrenheit
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_direction_name: Option<&'static str>,
    pub timestamp: Option<String>, // floored to the minute
}
