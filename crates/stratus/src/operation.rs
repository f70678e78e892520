//! Operation shapes and response decoding
//!
//! Every remote operation is a request struct implementing [`Operation`]. The
//! client serializes it, hands it to the transport and decodes the body into
//! [`Operation::Output`], then attaches [`ResponseMetadata`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::http::RawResponse;
use crate::protocol::{Protocol, ServiceSpec, json, xml};

/// A single remote operation.
pub trait Operation: Serialize + Send + Sync + 'static {
    /// Response shape.
    type Output: DeserializeOwned + Default + HasMetadata + Send + 'static;

    /// Wire name of the operation, e.g. `GetQueueUrl`.
    const NAME: &'static str;

    /// Service the operation belongs to.
    fn service() -> &'static ServiceSpec;

    /// Fill generated fields such as idempotency tokens before sending.
    fn prepare(&mut self) {}
}

/// Response shapes that carry transport metadata.
pub trait HasMetadata {
    /// Metadata of the response this shape was decoded from.
    fn response_metadata(&self) -> &ResponseMetadata;

    /// Attach metadata. Called once by the client.
    fn set_response_metadata(&mut self, metadata: ResponseMetadata);
}

const KEPT_HEADERS: &[&str] = &["content-type", "content-length", "date"];

/// Transport details of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Service request id.
    pub request_id: Option<String>,
    /// HTTP status code.
    pub http_status: u16,
    /// Retries the transport needed.
    pub retries: u32,
    /// `x-amz*` headers plus content type, length and date, lowercased.
    pub headers: BTreeMap<String, String>,
}

impl ResponseMetadata {
    /// Extract metadata from a raw response.
    ///
    /// The request id comes from the headers. Query responses also carry it as
    /// `<RequestId>` in the XML body.
    pub fn from_raw(raw: &RawResponse, protocol: Protocol) -> Self {
        let headers = raw
            .headers
            .iter()
            .filter(|(name, _)| {
                let name = name.as_str();
                name.starts_with("x-amz") || KEPT_HEADERS.contains(&name)
            })
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let request_id = raw.request_id().map(str::to_string).or_else(|| match protocol {
            Protocol::Query => xml::text(std::str::from_utf8(&raw.body).ok()?, "RequestId"),
            Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => None,
        });

        Self {
            request_id,
            http_status: raw.status,
            retries: raw.retries,
            headers,
        }
    }
}

/// Decode a successful response body into the output shape of `O`.
pub(crate) fn decode_output<O: Operation>(raw: &RawResponse) -> Result<O::Output> {
    let mut output: O::Output = match O::service().protocol {
        Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => json::decode_body(&raw.body)?,
        Protocol::Query => xml::decode_result(&String::from_utf8_lossy(&raw.body), O::NAME)?,
    };
    output.set_response_metadata(ResponseMetadata::from_raw(raw, O::service().protocol));
    Ok(output)
}

/// Implements [`HasMetadata`] for output shapes with a `response_metadata` field.
macro_rules! has_metadata {
    ($($output:ty),+ $(,)?) => {
        $(
            impl $crate::operation::HasMetadata for $output {
                fn response_metadata(&self) -> &$crate::operation::ResponseMetadata {
                    &self.response_metadata
                }

                fn set_response_metadata(&mut self, metadata: $crate::operation::ResponseMetadata) {
                    self.response_metadata = metadata;
                }
            }
        )+
    };
}

/// Implements [`Operation`] (and [`HasMetadata`] for the output).
///
/// `operation!(SERVICE, GetQueueUrl: GetQueueUrlRequest => GetQueueUrlResponse);`
macro_rules! operation {
    ($service:path, $name:ident: $input:ty => $output:ty) => {
        impl $crate::operation::Operation for $input {
            type Output = $output;
            const NAME: &'static str = stringify!($name);

            fn service() -> &'static $crate::protocol::ServiceSpec {
                &$service
            }
        }

        $crate::operation::has_metadata!($output);
    };
    ($service:path, $name:ident: $input:ty => $output:ty, prepare($this:ident) $prepare:block) => {
        impl $crate::operation::Operation for $input {
            type Output = $output;
            const NAME: &'static str = stringify!($name);

            fn service() -> &'static $crate::protocol::ServiceSpec {
                &$service
            }

            fn prepare(&mut self) {
                let $this = self;
                $prepare
            }
        }

        $crate::operation::has_metadata!($output);
    };
}

pub(crate) use has_metadata;
pub(crate) use operation;
