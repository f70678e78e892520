//! The transport trait and the values that cross it.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::fmt;
use url::Url;

use crate::error::Result;
use crate::protocol::ServiceSpec;

/// One operation invocation, before encoding.
#[derive(Debug, Clone)]
pub struct ServiceCall {
    /// Target service.
    pub service: &'static ServiceSpec,
    /// Operation name, e.g. `ListQueues`.
    pub operation: &'static str,
    /// The request shape encoded as JSON, unset fields already omitted.
    pub input: serde_json::Value,
}

/// A successful response, body not yet decoded.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
    /// Retries it took to get this response.
    pub retries: u32,
}

impl RawResponse {
    /// A response with no headers and no retries.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            retries: 0,
        }
    }

    /// The service request id from the `x-amzn-requestid` family of headers.
    pub fn request_id(&self) -> Option<&str> {
        ["x-amzn-requestid", "x-amz-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name))
            .and_then(|v| v.to_str().ok())
    }
}

/// A signed request as it is about to go on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Service name, for logs.
    pub service: &'static str,
    /// Operation name, for logs.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Full URL.
    pub url: Url,
    /// Headers, including the signature.
    pub headers: HeaderMap,
    /// Encoded body.
    pub body: Bytes,
}

/// Sends service calls and returns raw responses.
///
/// Implementations own encoding, endpoint resolution, signing, retries and
/// mapping of error statuses to [`crate::Error::Service`].
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform the call.
    async fn invoke(&self, call: ServiceCall) -> Result<RawResponse>;

    /// Transport name for debugging/logging.
    fn name(&self) -> &'static str;
}
