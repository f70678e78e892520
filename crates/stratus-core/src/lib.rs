#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core building blocks for the stratus service bindings.
//!
//! - [`Optional`]: tri-state field values (unset, null, present) used by every
//!   request and response shape.
//! - [`Paginator`]: a lazy stream of pages driven by continuation tokens.
//! - [`Timestamp`] and [`Blob`]: wire scalars that decode from both the JSON
//!   and XML protocol encodings.
//! - [`retry`]: exponential backoff used by the transport.
//! - [`pipeline`]: JSON encode/decode helpers.
//!
//! ```rust
//! use stratus_core::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let mut pages = Paginator::<u32, std::io::Error>::from_pages(vec![Ok(1), Ok(2)]);
//! assert_eq!(pages.next().await.unwrap().unwrap(), 1);
//! # }
//! ```

pub mod optional;
pub mod pagination;
pub mod pipeline;
pub mod retry;
pub mod wire;

pub use optional::Optional;
pub use pagination::Paginator;
pub use wire::{Blob, Timestamp};

/// Re-exports of the commonly used items.
pub mod prelude {
    pub use crate::optional::Optional;
    pub use crate::pagination::Paginator;
    pub use crate::pipeline::{DeserializePipeline, SerializePipeline};
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, RetryDecision, retry_with,
        retry_with_policy,
    };
    pub use crate::wire::{Blob, Timestamp};
}
