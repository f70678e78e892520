//! HTTP transport, signing and middleware
//!
//! [`Transport`] is the seam between the typed bindings and the network. The
//! client hands it a [`ServiceCall`] and gets back a [`RawResponse`] for a
//! successful status, or an error. [`AwsTransport`] is the production
//! implementation.

pub use aws_transport::{AwsTransport, AwsTransportBuilder};
pub use transport::{PreparedRequest, RawResponse, ServiceCall, Transport};

mod aws_transport;
pub mod middleware;
pub mod signing;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
