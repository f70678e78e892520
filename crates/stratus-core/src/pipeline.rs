//! JSON encode/decode helpers shared by request and response shapes.
//!
//! Request shapes only need to serialize and response shapes only need to
//! deserialize, so the two directions are separate traits with blanket impls.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encoding side of the pipeline, available on every `Serialize` type.
///
/// ```
/// use serde::Serialize;
/// use stratus_core::pipeline::SerializePipeline;
///
/// #[derive(Serialize)]
/// struct GetQueueUrl { #[serde(rename = "QueueName")] queue_name: String }
///
/// let value = GetQueueUrl { queue_name: "jobs".into() }.to_json_value().unwrap();
/// assert_eq!(value["QueueName"], "jobs");
/// ```
pub trait SerializePipeline: Serialize {
    /// Encode to a JSON value.
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Encode to compact JSON text.
    fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Encode to indented JSON text, for logs and fixtures.
    fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: Serialize + ?Sized> SerializePipeline for T {}

/// Decoding side of the pipeline, available on every `DeserializeOwned` type.
pub trait DeserializePipeline: DeserializeOwned {
    /// Decode from a JSON value.
    fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Decode from JSON text.
    fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Decode from raw bytes. An empty or whitespace-only body decodes to
    /// `Default`, which is how the JSON protocols report "no output fields".
    fn from_json_body(body: &[u8]) -> Result<Self, serde_json::Error>
    where
        Self: Default,
    {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

impl<T: DeserializeOwned> DeserializePipeline for T {}
