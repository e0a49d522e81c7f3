//! Result serialization as JSON and `MessagePack`.
//!
//! `MessagePack` output uses named fields so it decodes into the same
//! structure as the JSON form.

use thiserror::Error;

use crate::result::CalculationResult;

/// A serialization failure.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// JSON encoding or decoding failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// `MessagePack` encoding failed.
    #[error("msgpack encode: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    /// `MessagePack` decoding failed.
    #[error("msgpack decode: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

/// Serializes a result to compact JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(result: &CalculationResult) -> Result<String, SerializeError> {
    Ok(serde_json::to_string(result)?)
}

/// Serializes a result to indented JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(result: &CalculationResult) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Deserializes a result from JSON.
///
/// # Errors
///
/// Returns an error if the input is not a serialized result.
pub fn from_json(json: &str) -> Result<CalculationResult, SerializeError> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a result to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(result: &CalculationResult) -> Result<Vec<u8>, SerializeError> {
    Ok(rmp_serde::to_vec_named(result)?)
}

/// Deserializes a result from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the input is not a serialized result.
pub fn from_bytes(bytes: &[u8]) -> Result<CalculationResult, SerializeError> {
    Ok(rmp_serde::from_slice(bytes)?)
}
