//! Configuration for the stratus client

use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Static AWS credentials used to sign requests.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
}

impl Credentials {
    /// Long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into().into_boxed_str()),
            session_token: None,
        }
    }

    /// Attach a session token, for temporary credentials.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// The access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        self.secret_access_key.expose_secret()
    }

    pub(crate) fn session_token(&self) -> Option<&str> {
        self.session_token.as_ref().map(|t| t.expose_secret())
    }

    /// Both halves of the key pair are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.access_key_id.trim().is_empty() && !self.secret_access_key().trim().is_empty()
    }

    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
    #[cfg(feature = "env")]
    pub fn from_env() -> Option<Self> {
        use std::env;

        let key = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let creds = Self::new(key, secret);
        Some(match env::var("AWS_SESSION_TOKEN") {
            Ok(token) if !token.is_empty() => creds.with_session_token(token),
            _ => creds,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// An AWS region name such as `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Wrap a region name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The region name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DNS suffix for endpoints in this region's partition.
    pub fn dns_suffix(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Configuration for the stratus client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Region requests are sent to
    pub region: Option<Region>,

    /// Signing credentials
    pub credentials: Option<Credentials>,

    /// Endpoint override for every service (LocalStack, proxies, tests)
    pub endpoint_url: Option<String>,

    /// Timeout for a whole request
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Maximum number of retries for transient failures
    pub max_retries: u32,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Client-side rate limiting
    pub rate_limit: Option<RateLimitConfig>,

    /// Appended to the `user-agent` header
    pub user_agent_suffix: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            credentials: None,
            endpoint_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            default_headers: HeaderMap::new(),
            proxy: None,
            rate_limit: None,
            user_agent_suffix: None,
        }
    }
}

impl ClientConfig {
    /// A configuration for `region` with the given credentials.
    pub fn new(region: impl Into<Region>, credentials: Credentials) -> Self {
        Self {
            region: Some(region.into()),
            credentials: Some(credentials),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// This will look for:
    /// - `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
    /// - `AWS_ENDPOINT_URL` for an endpoint override
    /// - `AWS_MAX_ATTEMPTS` for total attempts (retries + 1)
    /// - `STRATUS_TIMEOUT` for the request timeout, in seconds
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        config.region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok()
            .filter(|r| !r.trim().is_empty())
            .map(Region::from);

        config.credentials = Credentials::from_env();

        if let Ok(endpoint) = env::var("AWS_ENDPOINT_URL")
            && !endpoint.trim().is_empty()
        {
            config.endpoint_url = Some(endpoint);
        }

        if let Ok(attempts) = env::var("AWS_MAX_ATTEMPTS") {
            let attempts = attempts.trim().parse::<u32>().map_err(|_| {
                Error::MissingConfig(format!("AWS_MAX_ATTEMPTS must be a positive integer, got {attempts:?}"))
            })?;
            config.max_retries = attempts.saturating_sub(1);
        }

        if let Ok(timeout) = env::var("STRATUS_TIMEOUT")
            && let Ok(secs) = timeout.trim().parse::<u64>()
        {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.region.is_some() {
            self.region = other.region;
        }
        if other.credentials.is_some() {
            self.credentials = other.credentials;
        }
        if other.endpoint_url.is_some() {
            self.endpoint_url = other.endpoint_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        if other.max_retries != DEFAULT_MAX_RETRIES {
            self.max_retries = other.max_retries;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.rate_limit.is_some() {
            self.rate_limit = other.rate_limit;
        }
        if other.user_agent_suffix.is_some() {
            self.user_agent_suffix = other.user_agent_suffix;
        }

        self
    }
}

/// Configuration for client-side rate limiting.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per second
    pub requests_per_second: u32,

    /// Burst size for the token bucket
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 20,
        }
    }
}

pub(crate) fn parse_header(key: &str, value: &str) -> Result<(http::HeaderName, http::HeaderValue)> {
    let name = key
        .parse::<http::HeaderName>()
        .map_err(|_| Error::InvalidHeaderName(key.to_string()))?;
    let value = value
        .parse::<http::HeaderValue>()
        .map_err(|_| Error::InvalidHeaderValue(value.to_string()))?;
    Ok((name, value))
}
