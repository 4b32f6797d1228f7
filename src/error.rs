//! Errors raised while decoding a single Tempest datagram.
//!
//! None of these ever outlive the datagram that caused them: the collector
//! logs them and moves on to the next one.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Malformed observation batch: expected exactly 1 row, found {rows}")]
    MalformedObservationBatch { rows: usize },

    #[error("Cannot coerce field #{index}: {raw}")]
    FieldCoercionError { index: usize, raw: String },

    #[error("Unknown {field} value: {value}")]
    UnknownEnumValue { field: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
