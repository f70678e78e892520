//! Wire protocols and per-service endpoint metadata.
//!
//! Every service speaks one of three protocols: `awsJson1_0`, `awsJson1_1`
//! (JSON body plus an `X-Amz-Target` header) or the Query protocol (form body,
//! XML response). [`ServiceSpec`] records which one, together with the
//! endpoint prefix and signing name.

pub mod json;
pub mod query;
pub mod xml;

use crate::config::Region;

/// The request/response encoding a service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `application/x-amz-json-1.0`
    AwsJson1_0,
    /// `application/x-amz-json-1.1`
    AwsJson1_1,
    /// Form-encoded request, XML response
    Query,
}

impl Protocol {
    /// `Content-Type` of request bodies.
    pub fn content_type(self) -> &'static str {
        match self {
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::Query => "application/x-www-form-urlencoded; charset=utf-8",
        }
    }

    /// Whether responses are JSON.
    pub fn is_json(self) -> bool {
        !matches!(self, Protocol::Query)
    }
}

/// Static description of one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Short name used in logs and errors.
    pub name: &'static str,
    /// Hostname prefix, e.g. `sqs` or `api.ecr`.
    pub endpoint_prefix: &'static str,
    /// SigV4 service name.
    pub signing_name: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// JSON target prefix, or the API version for the Query protocol.
    pub target: &'static str,
    /// Region the service is pinned to, for global endpoints.
    pub global_region: Option<&'static str>,
}

impl ServiceSpec {
    /// The region used for the host name and signature.
    pub fn signing_region(&self, configured: &Region) -> Region {
        match self.global_region {
            Some(pinned) => Region::from(pinned),
            None => configured.clone(),
        }
    }

    /// `https://{prefix}.{region}.{suffix}` for this service.
    pub fn endpoint(&self, configured: &Region) -> String {
        let region = self.signing_region(configured);
        format!(
            "https://{}.{}.{}",
            self.endpoint_prefix,
            region,
            region.dns_suffix()
        )
    }

    /// `X-Amz-Target` value for a JSON operation.
    pub fn target_header(&self, operation: &str) -> String {
        format!("{}.{}", self.target, operation)
    }
}
