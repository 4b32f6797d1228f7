// rapid_wind: [epoch, wind speed (m/s), wind direction (degrees)]
use super::info::RapidWind;
use super::row;
use crate::error::Result;
use serde_json::Value;

pub fn decode(msg: &Value) -> Result<RapidWind> {
    let ob = row::flat(msg)?;
    Ok(RapidWind {
        wind_speed: row::float(ob, 1)?,
        wind_direction: row::float(ob, 2)?,
        timestamp: row::timestamp(ob, 0)?,
    })
}
