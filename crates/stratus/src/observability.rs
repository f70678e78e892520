//! Centralized observability utilities for structured logging
//!
//! Every operation sent through the client is logged through this layer, so
//! service and operation names appear on each event the same way.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Service call metadata for structured logging
#[derive(Debug, Clone, Copy)]
pub struct CallMetadata {
    /// Service name, e.g. `sqs`
    pub service: &'static str,
    /// Operation name, e.g. `SendMessage`
    pub operation: &'static str,
}

impl CallMetadata {
    /// Create new call metadata
    pub fn new(service: &'static str, operation: &'static str) -> Self {
        Self { service, operation }
    }

    /// Log call being sent
    pub fn log_start(&self) {
        debug!(
            service = self.service,
            operation = self.operation,
            "Sending service call"
        );
    }

    /// Log successful response
    pub fn log_success(&self, status: u16, elapsed: Duration, retries: u32) {
        info!(
            service = self.service,
            operation = self.operation,
            status,
            elapsed_ms = elapsed.as_millis(),
            retries,
            "Service call succeeded"
        );
    }

    /// Log failed call
    pub fn log_error(&self, elapsed: Duration, error: &crate::Error) {
        warn!(
            service = self.service,
            operation = self.operation,
            elapsed_ms = elapsed.as_millis(),
            code = error.code(),
            error = %error,
            "Service call failed"
        );
    }
}

/// Timer for measuring call duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `stratus=info`).
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratus=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
