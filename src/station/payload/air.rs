// obs_air row layout:
// 0 epoch, 1 station pressure (MB), 2 air temperature (C), 3 relative humidity (%),
// 4 lightning strike count, 5 lightning strike avg distance (km),
// 6 battery (V), 7 report interval (minutes)
use super::info::Air;
use super::row;
use crate::error::Result;
use serde_json::Value;

pub fn decode(msg: &Value) -> Result<Air> {
    let obs = row::single_row(msg)?;
    Ok(Air {
        timestamp: row::timestamp(obs, 0)?,
        pressure: row::float(obs, 1)?,
        air_temperature: row::float(obs, 2)?,
        relative_humidity: row::float(obs, 3)?,
        lightning_strike_count: row::integer(obs, 4)?,
        lightning_strike_avg_distance: row::float(obs, 5)?,
    })
}
