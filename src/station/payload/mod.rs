pub mod air;
pub mod info;
pub mod row;
pub mod sky;
pub mod st;
pub mod units;
pub mod wind;

use crate::error::{DecodeError, Result};
use info::Sample;
use serde_json::Value;

const TYPE: &str = "type";

// Message types this collector understands, everything else is passed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    RapidWind,
    Air,
    Sky,
    Station,
    Other(String),
}

impl From<&str> for MessageType {
    fn from(tag: &str) -> Self {
        match tag {
            "rapid_wind" => MessageType::RapidWind,
            "obs_air" => MessageType::Air,
            "obs_sky" => MessageType::Sky,
            "obs_st" => MessageType::Station,
            other => MessageType::Other(other.to_string()),
        }
    }
}

impl MessageType {
    pub fn of(msg: &Value) -> Result<Self> {
        match msg.get(TYPE) {
            Some(Value::String(tag)) => Ok(MessageType::from(tag.as_str())),
            Some(other) => Err(DecodeError::MalformedPayload(format!(
                "`{TYPE}` is not a string: {other}"
            ))),
            None => Err(DecodeError::MalformedPayload(format!("missing `{TYPE}` field"))),
        }
    }
}

/// Decodes a parsed Tempest message into its sample.
///
/// Message types with no decoder here (device_status, hub_status, evt_precip...)
/// give `Ok(None)`.
pub fn route(msg: &Value) -> Result<Option<Sample>> {
    let sample = match MessageType::of(msg)? {
        MessageType::RapidWind => Sample::RapidWind(wind::decode(msg)?),
        MessageType::Air => Sample::Air(air::decode(msg)?),
        MessageType::Sky => Sample::Sky(sky::decode(msg)?),
        MessageType::Station => Sample::Station(st::decode(msg)?),
        MessageType::Other(_) => return Ok(None),
    };
    Ok(Some(sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags() {
        assert_eq!(MessageType::from("obs_air"), MessageType::Air);
        assert_eq!(MessageType::from("rapid_wind"), MessageType::RapidWind);
        assert_eq!(MessageType::from("obs_sky"), MessageType::Sky);
        assert_eq!(MessageType::from("obs_st"), MessageType::Station);
        assert_eq!(
            MessageType::from("hub_status"),
            MessageType::Other("hub_status".into())
        );
    }

    #[test]
    fn routes_to_decoder() {
        let msg = json!({"type": "rapid_wind", "ob": [1493322445, 2.3, 128]});
        assert!(matches!(route(&msg), Ok(Some(Sample::RapidWind(_)))));
        let msg = json!({"type": "obs_air", "obs": [[1493164835, 835.0, 10.0, 45, 1, 7.2, 3.46, 1]]});
        assert!(matches!(route(&msg), Ok(Some(Sample::Air(_)))));
    }

    #[test]
    fn unrecognized_type_yields_nothing() {
        let msg = json!({
            "serial_number": "AR-00004049",
            "type": "device_status",
            "hub_sn": "HB-00000001",
            "timestamp": 1510855923,
            "uptime": 2189,
            "voltage": 3.50,
            "firmware_revision": 17,
            "rssi": -17,
            "hub_rssi": -87,
            "sensor_status": 0,
            "debug": 0
        });
        assert_eq!(route(&msg), Ok(None));
    }

    #[test]
    fn missing_type() {
        assert!(matches!(
            route(&json!({"ob": [1, 2, 3]})),
            Err(DecodeError::MalformedPayload(_))
        ));
        assert!(matches!(
            route(&json!({"type": 7})),
            Err(DecodeError::MalformedPayload(_))
        ));
        assert!(matches!(
            route(&json!([1, 2, 3])),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn decode_errors_propagate() {
        let msg = json!({"type": "obs_sky", "obs": []});
        assert_eq!(
            route(&msg),
            Err(DecodeError::MalformedObservationBatch { rows: 0 })
        );
    }
}
