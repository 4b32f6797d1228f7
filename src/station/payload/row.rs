// Positional field access for Tempest observation arrays
use super::super::super::Timestamp;
use crate::error::{DecodeError, Result};
use chrono::prelude::*;
use serde_json::Value;

const OB: &str = "ob";
const OBS: &str = "obs";

fn coercion_error(index: usize, raw: Option<&Value>) -> DecodeError {
    DecodeError::FieldCoercionError {
        index,
        raw: raw.map_or_else(|| "missing".into(), |v| v.to_string()),
    }
}

fn array<'a>(msg: &'a Value, key: &str) -> Result<&'a [Value]> {
    match msg.get(key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(DecodeError::MalformedPayload(format!(
            "`{key}` is not an array: {other}"
        ))),
        None => Err(DecodeError::MalformedPayload(format!("missing `{key}` array"))),
    }
}

/// The flat `ob` array carried by rapid_wind messages.
pub fn flat(msg: &Value) -> Result<&[Value]> {
    array(msg, OB)
}

/// The one and only row of an `obs` batch.
pub fn single_row(msg: &Value) -> Result<&[Value]> {
    match array(msg, OBS)? {
        [Value::Array(row)] => Ok(row.as_slice()),
        [other] => Err(DecodeError::MalformedPayload(format!(
            "`{OBS}` row is not an array: {other}"
        ))),
        rows => Err(DecodeError::MalformedObservationBatch { rows: rows.len() }),
    }
}

pub fn float(row: &[Value], index: usize) -> Result<f64> {
    let raw = row.get(index);
    let value = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.ok_or_else(|| coercion_error(index, raw))
}

// null stays null, anything else must be a number
pub fn optional_float(row: &[Value], index: usize) -> Result<Option<f64>> {
    match row.get(index) {
        Some(Value::Null) => Ok(None),
        _ => float(row, index).map(Some),
    }
}

// Fractional values are truncated toward zero
pub fn integer(row: &[Value], index: usize) -> Result<i64> {
    let raw = row.get(index);
    let value = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    value.ok_or_else(|| coercion_error(index, raw))
}

// Unix epoch seconds, fractional part kept as nanoseconds
pub fn timestamp(row: &[Value], index: usize) -> Result<Timestamp> {
    let epoch = float(row, index)?;
    let secs = epoch.floor();
    let nanos = ((epoch - secs) * 1e9).round().min(999_999_999.0) as u32;
    if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
        return Err(coercion_error(index, row.get(index)));
    }
    Utc.timestamp_opt(secs as i64, nanos)
        .single()
        .ok_or_else(|| coercion_error(index, row.get(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_row_requires_exactly_one() {
        let msg = json!({"obs": []});
        assert_eq!(
            single_row(&msg),
            Err(DecodeError::MalformedObservationBatch { rows: 0 })
        );
        let msg = json!({"obs": [[1, 2], [3, 4]]});
        assert_eq!(
            single_row(&msg),
            Err(DecodeError::MalformedObservationBatch { rows: 2 })
        );
        let msg = json!({"obs": [[1, 2]]});
        assert_eq!(single_row(&msg).unwrap().len(), 2);
    }

    #[test]
    fn missing_or_scalar_batches() {
        assert!(matches!(
            single_row(&json!({"ob": [1]})),
            Err(DecodeError::MalformedPayload(_))
        ));
        assert!(matches!(
            single_row(&json!({"obs": 3})),
            Err(DecodeError::MalformedPayload(_))
        ));
        assert!(matches!(
            single_row(&json!({"obs": [3]})),
            Err(DecodeError::MalformedPayload(_))
        ));
        assert!(matches!(
            flat(&json!({"obs": [[1]]})),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn float_coercion() {
        let row = [json!(45), json!("7.2"), json!(true), json!(null)];
        assert_eq!(float(&row, 0), Ok(45.0));
        assert_eq!(float(&row, 1), Ok(7.2));
        assert_eq!(
            float(&row, 2),
            Err(DecodeError::FieldCoercionError {
                index: 2,
                raw: "true".into()
            })
        );
        assert_eq!(
            float(&row, 3),
            Err(DecodeError::FieldCoercionError {
                index: 3,
                raw: "null".into()
            })
        );
        assert_eq!(
            float(&row, 9),
            Err(DecodeError::FieldCoercionError {
                index: 9,
                raw: "missing".into()
            })
        );
    }

    #[test]
    fn optional_float_passes_null() {
        let row = [json!(null), json!(1.5), json!("rain")];
        assert_eq!(optional_float(&row, 0), Ok(None));
        assert_eq!(optional_float(&row, 1), Ok(Some(1.5)));
        assert!(optional_float(&row, 2).is_err());
    }

    #[test]
    fn integer_coercion() {
        let row = [json!(3), json!(2.9), json!("4"), json!("4.5"), json!(-1.7)];
        assert_eq!(integer(&row, 0), Ok(3));
        assert_eq!(integer(&row, 1), Ok(2));
        assert_eq!(integer(&row, 2), Ok(4));
        assert!(integer(&row, 3).is_err());
        assert_eq!(integer(&row, 4), Ok(-1));
    }

    #[test]
    fn epoch_timestamps() {
        let row = [json!(1493164835), json!(1493164835.5), json!("soon")];
        assert_eq!(timestamp(&row, 0).unwrap().timestamp(), 1493164835);
        let t = timestamp(&row, 1).unwrap();
        assert_eq!(t.timestamp(), 1493164835);
        assert_eq!(t.timestamp_subsec_millis(), 500);
        assert!(timestamp(&row, 2).is_err());
    }
}
