// obs_st row layout:
// 0 epoch, 1 wind lull, 2 wind avg, 3 wind gust (m/s), 4 wind direction (degrees),
// 5 wind sample interval (s), 6 station pressure (MB), 7 air temperature (C),
// 8 relative humidity (%), 9 illuminance (lux), 10 UV index,
// 11 solar radiation (W/m^2), 12 rain over previous minute (mm),
// 13 precipitation type, 14 lightning strike avg distance (km),
// 15 lightning strike count, 16 battery (V), 17 report interval (minutes)
use super::info::Station;
use super::row;
use super::units::station_precipitation_type;
use crate::error::Result;
use serde_json::Value;

pub fn decode(msg: &Value) -> Result<Station> {
    let obs = row::single_row(msg)?;
    Ok(Station {
        timestamp: row::timestamp(obs, 0)?,
        wind_lull: row::float(obs, 1)?,
        wind_avg: row::float(obs, 2)?,
        wind_gust: row::float(obs, 3)?,
        wind_direction: row::float(obs, 4)?,
        pressure: row::float(obs, 6)?,
        air_temperature: row::float(obs, 7)?,
        relative_humidity: row::float(obs, 8)?,
        illuminance: row::float(obs, 9)?,
        uv_index: row::float(obs, 10)?,
        solar_radiation: row::float(obs, 11)?,
        rain_accumulated_last_minute: row::float(obs, 12)?,
        precipitation_type: station_precipitation_type(row::integer(obs, 13)?)?,
        lightning_strike_avg_distance: row::float(obs, 14)?,
        lightning_strike_count: row::integer(obs, 15)?,
    })
}
