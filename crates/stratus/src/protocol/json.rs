//! JSON protocol (`awsJson1_0` / `awsJson1_1`) encoding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use stratus_core::pipeline::DeserializePipeline;

use crate::error::Result;

/// Encode a request body. An input with no fields is sent as `{}`.
pub fn encode_body(input: &Value) -> Result<Vec<u8>> {
    match input {
        Value::Null => Ok(b"{}".to_vec()),
        other => Ok(serde_json::to_vec(other)?),
    }
}

/// Decode a response body; an empty body yields `T::default()`.
pub fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    Ok(T::from_json_body(body)?)
}
