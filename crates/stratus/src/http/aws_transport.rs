//! Signed HTTP transport for AWS service endpoints
//!
//! Resolves the endpoint for each service, encodes the body for the service's
//! protocol, signs with SigV4 and sends with `reqwest`. Transient failures are
//! retried with exponential backoff, or after the service's `Retry-After`.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use stratus_core::retry::{ExponentialBackoff, RetryDecision, retry_with_policy};
use url::Url;

use super::middleware::{Middleware, MiddlewareStack, RateLimitMiddleware, TracingMiddleware};
use super::signing::{SigV4Signer, host_header};
use super::{PreparedRequest, RawResponse, ServiceCall, Transport};
use crate::config::{ClientConfig, Credentials, RateLimitConfig, Region};
use crate::error::{Error, Result};
use crate::protocol::{Protocol, ServiceSpec, json, query};

/// Transport that talks to AWS endpoints over HTTPS.
///
/// # Example
///
/// ```rust,no_run
/// use stratus::http::AwsTransport;
/// use stratus::config::Credentials;
///
/// let transport = AwsTransport::builder()
///     .region("us-east-1")
///     .credentials(Credentials::new("AKID...", "secret"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AwsTransport {
    pub(crate) inner: Arc<TransportInner>,
}

#[derive(Debug)]
pub(crate) struct TransportInner {
    pub(crate) http_client: reqwest::Client,
    pub(crate) region: Region,
    pub(crate) credentials: Credentials,
    pub(crate) endpoint_url: Option<Url>,
    pub(crate) timeout: Duration,
    pub(crate) backoff: ExponentialBackoff,
    pub(crate) default_headers: HeaderMap,
    pub(crate) middleware: MiddlewareStack,
}

impl AwsTransport {
    /// Create a new builder for configuring the transport.
    pub fn builder() -> AwsTransportBuilder {
        AwsTransportBuilder::default()
    }

    /// Build from a client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .max_retries(config.max_retries);
        builder.region = config.region.clone();
        builder.credentials = config.credentials.clone();
        builder.endpoint_url = config.endpoint_url.clone();
        builder.proxy = config.proxy.clone();
        builder.rate_limit = config.rate_limit.clone();
        builder.user_agent_suffix = config.user_agent_suffix.clone();
        builder.default_headers = config.default_headers.clone();
        builder.build()
    }

    /// The configured region.
    pub fn region(&self) -> &Region {
        &self.inner.region
    }

    /// Endpoint used for `service`: the override if set, else the regional one.
    pub fn endpoint_for(&self, service: &ServiceSpec) -> Result<Url> {
        match &self.inner.endpoint_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(&service.endpoint(&self.inner.region))
                .map_err(|e| Error::InvalidUrl(e.to_string())),
        }
    }

    fn encode(&self, call: &ServiceCall) -> Result<(Bytes, Vec<(&'static str, String)>)> {
        let spec = call.service;
        let mut headers = vec![("content-type", spec.protocol.content_type().to_string())];
        let body = match spec.protocol {
            Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => {
                headers.push(("x-amz-target", spec.target_header(call.operation)));
                json::encode_body(&call.input)?
            }
            Protocol::Query => query::encode_body(call.operation, spec.target, &call.input).into_bytes(),
        };
        Ok((Bytes::from(body), headers))
    }

    fn prepare(
        &self,
        call: &ServiceCall,
        url: &Url,
        body: &Bytes,
        extra: &[(&'static str, String)],
    ) -> Result<PreparedRequest> {
        let spec = call.service;
        let signing_region = spec.signing_region(&self.inner.region);
        let creds = &self.inner.credentials;

        let mut signed = BTreeMap::new();
        signed.insert("host".to_string(), host_header(url));
        for (name, value) in extra {
            signed.insert((*name).to_string(), value.clone());
        }

        SigV4Signer::new(
            creds.access_key_id(),
            creds.secret_access_key(),
            creds.session_token(),
            signing_region.as_str(),
            spec.signing_name,
        )
        .sign("POST", url, &mut signed, body, Utc::now());

        let mut headers = self.inner.default_headers.clone();
        for (name, value) in signed {
            if name == "host" {
                continue;
            }
            let name = HeaderName::try_from(name.as_str())
                .map_err(|_| Error::InvalidHeaderName(name.clone()))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|_| Error::InvalidHeaderValue(value.clone()))?;
            headers.insert(name, value);
        }

        Ok(PreparedRequest {
            service: spec.name,
            operation: call.operation,
            method: Method::POST,
            url: url.clone(),
            headers,
            body: body.clone(),
        })
    }

    async fn attempt(
        &self,
        call: &ServiceCall,
        url: &Url,
        body: &Bytes,
        extra: &[(&'static str, String)],
        retries: u32,
    ) -> Result<RawResponse> {
        // Signed per attempt so x-amz-date stays fresh across backoff sleeps.
        let request = self.prepare(call, url, body, extra)?;
        let request = self.inner.middleware.process_request(request).await?;

        let response = self
            .inner
            .http_client
            .request(request.method.clone(), request.url.as_str())
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.inner.timeout)
                } else {
                    Error::Connection(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let raw = self
            .inner
            .middleware
            .process_response(RawResponse {
                status,
                headers,
                body,
                retries,
            })
            .await?;

        if (200..300).contains(&raw.status) {
            Ok(raw)
        } else {
            Err(Error::from_response(
                call.service.name,
                call.operation,
                raw.status,
                &raw.headers,
                &raw.body,
            ))
        }
    }
}

#[async_trait]
impl Transport for AwsTransport {
    async fn invoke(&self, call: ServiceCall) -> Result<RawResponse> {
        let url = self.endpoint_for(call.service)?;
        let (body, extra) = self.encode(&call)?;

        retry_with_policy(
            &self.inner.backoff,
            |retries| self.attempt(&call, &url, &body, &extra, retries),
            |err: &Error| {
                if !err.is_retryable() {
                    return RetryDecision::Stop;
                }
                tracing::warn!(
                    service = call.service.name,
                    operation = call.operation,
                    error = %err,
                    retry_after = ?err.retry_after(),
                    "Retryable failure"
                );
                // A service-supplied Retry-After replaces the backoff delay.
                err.retry_after().map_or(RetryDecision::Backoff, RetryDecision::After)
            },
        )
        .await
    }

    fn name(&self) -> &'static str {
        "aws"
    }
}

/// Builder for creating an `AwsTransport` with custom configuration.
#[derive(Default)]
pub struct AwsTransportBuilder {
    region: Option<Region>,
    credentials: Option<Credentials>,
    endpoint_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_retries: Option<u32>,
    proxy: Option<String>,
    rate_limit: Option<RateLimitConfig>,
    user_agent_suffix: Option<String>,
    default_headers: HeaderMap,
}

impl AwsTransportBuilder {
    /// Set the region.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the signing credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Send every service to this URL instead of its regional endpoint.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Enable client-side rate limiting.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Append to the `user-agent` header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let (name, value) = crate::config::parse_header(&key.into(), &value.into())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Build the transport with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No region is configured (and none is found in the environment)
    /// - No credentials are configured, or they are empty
    /// - The endpoint override is empty or not http/https
    /// - HTTP client creation fails
    pub fn build(mut self) -> Result<AwsTransport> {
        #[cfg(feature = "env")]
        if self.region.is_none() || self.credentials.is_none() {
            let env = ClientConfig::from_env()?;
            self.region = self.region.or(env.region);
            self.credentials = self.credentials.or(env.credentials);
        }

        let region = self
            .region
            .ok_or_else(|| Error::MissingConfig("region (set AWS_REGION or configure one explicitly)".to_string()))?;

        let credentials = self.credentials.ok_or_else(|| {
            Error::Credentials(
                "No credentials provided. Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY or provide credentials explicitly.".to_string(),
            )
        })?;
        if !credentials.is_complete() {
            return Err(Error::Credentials("Access key id and secret access key must be non-empty".to_string()));
        }

        let endpoint_url = self.endpoint_url.map(|raw| parse_endpoint(&raw)).transpose()?;

        let timeout = self.timeout.unwrap_or(Duration::from_secs(60));
        let user_agent = match &self.user_agent_suffix {
            Some(suffix) => format!("stratus-rust/{} {suffix}", crate::VERSION),
            None => format!("stratus-rust/{}", crate::VERSION),
        };

        let mut http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(self.connect_timeout.unwrap_or(Duration::from_secs(10)))
            .user_agent(user_agent);
        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| Error::HttpClient(e.to_string()))?;
            http = http.proxy(proxy);
        }
        let http_client = http.build().map_err(|e| Error::HttpClient(e.to_string()))?;

        let mut middleware = MiddlewareStack::new();
        if let Some(limit) = &self.rate_limit {
            middleware.push(Box::new(RateLimitMiddleware::new(limit.requests_per_second, limit.burst_size)));
        }
        middleware.push(Box::new(TracingMiddleware));

        let backoff = ExponentialBackoff::builder()
            .max_retries(self.max_retries.unwrap_or(3))
            .build();

        Ok(AwsTransport {
            inner: Arc::new(TransportInner {
                http_client,
                region,
                credentials,
                endpoint_url,
                timeout,
                backoff,
                default_headers: self.default_headers,
                middleware,
            }),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Endpoint URL cannot be empty".to_string()));
    }
    let url: Url = raw.parse().map_err(|e| Error::InvalidUrl(format!("{e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{scheme}'. Only 'http' and 'https' are supported."
        ))),
    }
}
