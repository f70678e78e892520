//! # Stratus
//!
//! Typed async bindings for a handful of AWS service APIs:
//! - Glue (Data Catalog, job runs, crawlers)
//! - Route 53 Domains
//! - SQS
//! - ECR
//! - Elastic Load Balancing v2 (Query protocol)
//! - Secrets Manager
//! - Cost Explorer
//!
//! Every operation has a request shape, a response shape and a method on the
//! service resource. Optional fields are [`Optional`] values that stay off the
//! wire until set; list operations also get a `*_pages` method returning a lazy
//! [`Paginator`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use stratus::Client;
//! use stratus::services::sqs::{ListQueuesRequest, SendMessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     let mut pages = client.sqs().list_queues_pages(ListQueuesRequest::default());
//!     while let Some(page) = pages.try_next().await? {
//!         for url in page.queue_urls.get().into_iter().flatten() {
//!             client
//!                 .sqs()
//!                 .send_message(
//!                     SendMessageRequest::builder()
//!                         .queue_url(url.as_str())
//!                         .message_body("ping")
//!                         .build()?,
//!                 )
//!                 .await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, Credentials, RateLimitConfig, Region};
pub use error::{Error, Result, ServiceError};
pub use http::RawResponse;
pub use operation::{HasMetadata, Operation, ResponseMetadata};
pub use paginate::Paginated;
pub use stratus_core::{Blob, Optional, Paginator, Timestamp};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod operation;
pub mod paginate;
pub mod protocol;
pub mod services;

// Optional blocking client
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use stratus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Blob, Client, ClientConfig, Credentials, Error, Optional, Paginator, Region, Result,
        Timestamp,
    };

    #[cfg(feature = "blocking")]
    pub use crate::blocking::Client as BlockingClient;
}

/// Crate version, used in the `User-Agent` header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
