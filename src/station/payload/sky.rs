// obs_sky row layout:
// 0 epoch, 1 illuminance (lux), 2 UV index, 3 rain over previous minute (mm),
// 4 wind lull, 5 wind avg, 6 wind gust (m/s), 7 wind direction (degrees),
// 8 battery (V), 9 report interval (minutes), 10 solar radiation (W/m^2),
// 11 local day rain accumulation (mm, nullable), 12 precipitation type,
// 13 wind sample interval (s)
use super::info::Sky;
use super::row;
use super::units::precipitation_type;
use crate::error::Result;
use serde_json::Value;

pub fn decode(msg: &Value) -> Result<Sky> {
    let obs = row::single_row(msg)?;
    Ok(Sky {
        timestamp: row::timestamp(obs, 0)?,
        illuminance: row::float(obs, 1)?,
        uv_index: row::float(obs, 2)?,
        rain_accumulated_last_minute: row::float(obs, 3)?,
        wind_lull: row::float(obs, 4)?,
        wind_avg: row::float(obs, 5)?,
        wind_gust: row::float(obs, 6)?,
        wind_direction: row::float(obs, 7)?,
        solar_radiation: row::float(obs, 10)?,
        rain_accumulated_today: row::optional_float(obs, 11)?,
        precipitation_type: precipitation_type(row::integer(obs, 12)?)?,
    })
}
