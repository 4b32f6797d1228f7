use super::super::super::Timestamp;
use chrono::serde::ts_seconds;
use serde::Serialize;

// ---------------------------------------------------
// Decoded samples, one per Tempest UDP message type
// ---------------------------------------------------

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecipitationType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "rain")]
    Rain,
    #[serde(rename = "hail")]
    Hail,
    // Only reported by Tempest (obs_st) devices, flagged as experimental
    #[serde(rename = "rain+hail")]
    RainAndHail,
}

// rapid_wind, sent every 3 seconds
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RapidWind {
    pub wind_speed: f64,     // m/s
    pub wind_direction: f64, // degrees
    #[serde(with = "ts_seconds")]
    pub timestamp: Timestamp,
}

// obs_air, AIR module
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Air {
    pub pressure: f64,          // MB
    pub air_temperature: f64,   // Celsius
    pub relative_humidity: f64, // %
    pub lightning_strike_count: i64,
    pub lightning_strike_avg_distance: f64, // km
    #[serde(with = "ts_seconds")]
    pub timestamp: Timestamp,
}

// obs_sky, SKY module
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Sky {
    #[serde(with = "ts_seconds")]
    pub timestamp: Timestamp,
    pub illuminance: f64, // lux
    pub uv_index: f64,
    pub rain_accumulated_last_minute: f64, // mm
    pub wind_lull: f64,                    // m/s
    pub wind_avg: f64,                     // m/s
    pub wind_gust: f64,                    // m/s
    pub wind_direction: f64,               // degrees
    pub solar_radiation: f64,              // W/m^2
    pub rain_accumulated_today: Option<f64>, // mm, null on the wire until the hub knows local time
    pub precipitation_type: PrecipitationType,
}

// obs_st, Tempest all-in-one device
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Station {
    #[serde(with = "ts_seconds")]
    pub timestamp: Timestamp,
    pub wind_lull: f64,
    pub wind_avg: f64,
    pub wind_gust: f64,
    pub wind_direction: f64,
    pub pressure: f64,
    pub air_temperature: f64,
    pub relative_humidity: f64,
    pub illuminance: f64,
    pub uv_index: f64,
    pub solar_radiation: f64,
    pub rain_accumulated_last_minute: f64,
    pub precipitation_type: PrecipitationType,
    pub lightning_strike_count: i64,
    pub lightning_strike_avg_distance: f64,
}

// Serialized with the wire message tag under "type"
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Sample {
    #[serde(rename = "rapid_wind")]
    RapidWind(RapidWind),
    #[serde(rename = "obs_air")]
    Air(Air),
    #[serde(rename = "obs_sky")]
    Sky(Sky),
    #[serde(rename = "obs_st")]
    Station(Station),
}
