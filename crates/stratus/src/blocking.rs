//! Blocking client
//!
//! A synchronous facade over [`crate::Client`]. Each call runs to completion on
//! a private current-thread tokio runtime, so it must not be used from inside
//! an async context.
//!
//! ```rust,no_run
//! use stratus::blocking::Client;
//! use stratus::services::sqs::ListQueuesRequest;
//!
//! # fn main() -> stratus::Result<()> {
//! let client = Client::from_env()?;
//! let pages = client.paginate_all(ListQueuesRequest::default())?;
//! println!("{} pages", pages.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::{ClientConfig, Credentials, Region};
use crate::error::Result;
use crate::http::Transport;
use crate::operation::Operation;
use crate::paginate::Paginated;

/// Synchronous client. Cheap to clone; clones share the runtime.
#[derive(Debug, Clone)]
pub struct Client {
    inner: crate::Client,
    runtime: Arc<Runtime>,
}

impl Client {
    /// Create a client for a region with explicit credentials.
    pub fn new(region: impl Into<Region>, credentials: Credentials) -> Result<Self> {
        Self::wrap(crate::Client::new(region, credentials)?)
    }

    /// Create a client from `AWS_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::wrap(crate::Client::from_env()?)
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::wrap(crate::Client::from_config(config)?)
    }

    /// Create a client over a custom transport.
    pub fn from_transport(transport: Arc<dyn Transport>) -> Result<Self> {
        Self::wrap(crate::Client::from_transport(transport))
    }

    fn wrap(inner: crate::Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// Perform one operation and wait for the result.
    pub fn send<O: Operation>(&self, operation: O) -> Result<O::Output> {
        self.runtime.block_on(self.inner.send(operation))
    }

    /// Fetch every page of a list operation, stopping at the first error.
    pub fn paginate_all<O: Paginated>(&self, operation: O) -> Result<Vec<O::Output>> {
        self.runtime
            .block_on(self.inner.paginate(operation).collect_pages())
    }

    /// The async client this wraps.
    pub fn async_client(&self) -> &crate::Client {
        &self.inner
    }
}
