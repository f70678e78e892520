//! HTTP middleware for request/response processing
//!
//! Middleware runs around every attempt, including retries.

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

use super::{PreparedRequest, RawResponse};
use crate::error::Result;

/// Trait for HTTP middleware.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Process a request before sending.
    async fn process_request(&self, request: PreparedRequest) -> Result<PreparedRequest> {
        Ok(request)
    }

    /// Process a response after receiving.
    async fn process_response(&self, response: RawResponse) -> Result<RawResponse> {
        Ok(response)
    }
}

/// Middleware that adds logging/tracing.
pub struct TracingMiddleware;

#[async_trait]
impl Middleware for TracingMiddleware {
    async fn process_request(&self, request: PreparedRequest) -> Result<PreparedRequest> {
        tracing::debug!(
            service = request.service,
            operation = request.operation,
            url = %request.url,
            body_size = request.body.len(),
            "Sending request"
        );
        Ok(request)
    }

    async fn process_response(&self, response: RawResponse) -> Result<RawResponse> {
        tracing::debug!(
            status = response.status,
            request_id = response.request_id(),
            "Received response"
        );
        Ok(response)
    }
}

/// Middleware that holds each request until the token bucket allows it.
pub struct RateLimitMiddleware {
    governor: Arc<governor::DefaultDirectRateLimiter>,
}

impl RateLimitMiddleware {
    /// Allow `requests_per_second` with bursts of up to `burst`.
    ///
    /// Zero values are raised to 1.
    pub fn new(requests_per_second: u32, burst: u32) -> Self {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst).unwrap_or(rate);
        let quota = Quota::per_second(rate).allow_burst(burst);
        Self {
            governor: Arc::new(RateLimiter::direct(quota)),
        }
    }
}

#[async_trait]
impl Middleware for RateLimitMiddleware {
    async fn process_request(&self, request: PreparedRequest) -> Result<PreparedRequest> {
        self.governor.until_ready().await;
        Ok(request)
    }
}

/// Composite middleware that chains multiple middleware.
#[derive(Default)]
pub struct MiddlewareStack {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl MiddlewareStack {
    /// Create a new middleware stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a middleware to the stack.
    pub fn push(&mut self, middleware: Box<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    /// Number of middlewares in the stack.
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    /// `true` when the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

impl std::fmt::Debug for MiddlewareStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareStack")
            .field("len", &self.middlewares.len())
            .finish()
    }
}

#[async_trait]
impl Middleware for MiddlewareStack {
    async fn process_request(&self, mut request: PreparedRequest) -> Result<PreparedRequest> {
        for middleware in &self.middlewares {
            request = middleware.process_request(request).await?;
        }
        Ok(request)
    }

    async fn process_response(&self, mut response: RawResponse) -> Result<RawResponse> {
        // Process in reverse order for responses
        for middleware in self.middlewares.iter().rev() {
            response = middleware.process_response(response).await?;
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::Mutex;

    fn request() -> PreparedRequest {
        PreparedRequest {
            service: "sqs",
            operation: "ListQueues",
            method: http::Method::POST,
            url: url::Url::parse("https://sqs.us-east-1.amazonaws.com/").unwrap(),
            headers: http::HeaderMap::new(),
            body: Bytes::from_static(b"{}"),
        }
    }

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Middleware for Recorder {
        async fn process_request(&self, request: PreparedRequest) -> Result<PreparedRequest> {
            self.log.lock().unwrap().push(format!("req:{}", self.name));
            Ok(request)
        }

        async fn process_response(&self, response: RawResponse) -> Result<RawResponse> {
            self.log.lock().unwrap().push(format!("resp:{}", self.name));
            Ok(response)
        }
    }

    #[tokio::test]
    async fn test_stack_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut stack = MiddlewareStack::new();
        stack.push(Box::new(Recorder { name: "a", log: Arc::clone(&log) }));
        stack.push(Box::new(Recorder { name: "b", log: Arc::clone(&log) }));
        assert_eq!(stack.len(), 2);

        stack.process_request(request()).await.unwrap();
        stack.process_response(RawResponse::new(200, "{}")).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["req:a", "req:b", "resp:b", "resp:a"]);
    }

    #[tokio::test]
    async fn test_tracing_and_rate_limit_pass_through() {
        let mut stack = MiddlewareStack::new();
        stack.push(Box::new(TracingMiddleware));
        stack.push(Box::new(RateLimitMiddleware::new(50, 5)));

        let out = stack.process_request(request()).await.unwrap();
        assert_eq!(out.operation, "ListQueues");
    }

    #[test]
    fn test_rate_limit_zero_values() {
        let _ = RateLimitMiddleware::new(0, 0);
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateLimitMiddleware>();
    }
}
