//! Errors raised while building media entities from raw records
//!
//! Records arrive as loosely-typed JSON. Absent fields fall back to safe
//! defaults, so these errors only cover values that are present but unusable.

use thiserror::Error;

/// Record conversion errors
#[derive(Debug, Error)]
pub enum RecordError {
    /// The JSON did not have the shape of a media record
    #[error("Malformed media record: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp field could not be parsed
    #[error("Invalid timestamp in '{field}': {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// Unrecognized media type name
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
