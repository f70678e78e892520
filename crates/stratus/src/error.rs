//! Error types for the stratus bindings
//!
//! Transport failures, configuration problems and service-reported errors all
//! surface as [`Error`]. Errors a service returns in its response body are
//! carried by [`ServiceError`], which keeps the raw body so callers can decode
//! the service's declared exception shapes with [`ServiceError::details`].

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a stratus error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stratus bindings.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a non-success status.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// XML response could not be decoded.
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Credentials are missing or unusable.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// A request could not be encoded for the wire.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::InvalidRequest(format!("missing required field `{}`", err.field_name()))
    }
}

/// An error reported by a service in its response.
#[derive(Debug, Clone, Error)]
#[error("{service} {operation} failed with {code} (HTTP {status}): {message}")]
pub struct ServiceError {
    /// Service that answered, e.g. `sqs`.
    pub service: String,
    /// Operation name, e.g. `GetQueueUrl`.
    pub operation: String,
    /// HTTP status code.
    pub status: u16,
    /// Error code with any namespace prefix removed, e.g. `QueueDoesNotExist`.
    pub code: String,
    /// Human-readable message, empty when the service sent none.
    pub message: String,
    /// Request id for support cases.
    pub request_id: Option<String>,
    /// Value of a `Retry-After` header, if the service sent one.
    pub retry_after: Option<Duration>,
    /// Raw response body.
    pub body: String,
}

const RETRYABLE_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "InternalError",
    "InternalFailure",
    "InternalServiceError",
    "InternalServiceException",
    "ServiceUnavailable",
    "ServiceUnavailableException",
    "RequestTimeout",
    "RequestTimeoutException",
];

impl ServiceError {
    /// `true` when the error code equals `code`.
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Whether the failure is transient: a throttling or internal error code,
    /// or HTTP 429, 500, 502, 503 or 504.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status, 429 | 500 | 502 | 503 | 504)
            || RETRYABLE_CODES.contains(&self.code.as_str())
    }

    /// Decode the body into one of the service's declared exception shapes.
    ///
    /// JSON bodies decode as a whole. XML bodies decode from their `<Error>`
    /// element. Returns `None` when the body does not fit `T`.
    pub fn details<T: DeserializeOwned>(&self) -> Option<T> {
        let body = self.body.trim_start();
        if body.starts_with('<') {
            let block = crate::protocol::xml::element(body, "Error")?;
            quick_xml::de::from_str(block).ok()
        } else {
            serde_json::from_str(body).ok()
        }
    }
}

impl Error {
    /// Build a service error from a non-success response.
    ///
    /// JSON bodies take the code from `__type` (namespace stripped) or the
    /// `x-amzn-ErrorType` header and the message from `message`/`Message`.
    /// XML bodies take `<Code>`, `<Message>` and `<RequestId>`.
    pub fn from_response(
        service: &str,
        operation: &str,
        status: u16,
        headers: &http::HeaderMap,
        body: &[u8],
    ) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let (code, message, body_request_id) = if text.trim_start().starts_with('<') {
            parse_xml_error(&text)
        } else {
            parse_json_error(&text)
        };

        let code = code
            .or_else(|| header("x-amzn-errortype").map(|t| strip_error_type(&t)))
            .unwrap_or_else(|| fallback_code(status).to_string());

        let request_id = header("x-amzn-requestid")
            .or_else(|| header("x-amz-request-id"))
            .or(body_request_id);

        let retry_after = header("retry-after")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        Error::Service(ServiceError {
            service: service.to_string(),
            operation: operation.to_string(),
            status,
            code,
            message: message.unwrap_or_default(),
            request_id,
            retry_after,
            body: text,
        })
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service(err) => err.is_retryable(),
            Error::Connection(_) | Error::Timeout(_) => true,
            _ => false,
        }
    }

    /// Get retry delay if the service asked for one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Service(err) => err.retry_after,
            _ => None,
        }
    }

    /// The service error, if this is one.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(err) => Some(err),
            Error::WithContext { source, .. } => source
                .downcast_ref::<Error>()
                .and_then(Error::as_service_error),
            _ => None,
        }
    }

    /// The service error code, if this is a service error.
    pub fn code(&self) -> Option<&str> {
        self.as_service_error().map(|e| e.code.as_str())
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

fn strip_error_type(raw: &str) -> String {
    let raw = raw.rsplit('#').next().unwrap_or(raw);
    raw.split(':').next().unwrap_or(raw).trim().to_string()
}

fn fallback_code(status: u16) -> &'static str {
    match status {
        400 => "BadRequest",
        403 => "AccessDenied",
        404 => "NotFound",
        429 => "Throttling",
        s if s >= 500 => "InternalFailure",
        _ => "Unknown",
    }
}

fn parse_json_error(text: &str) -> (Option<String>, Option<String>, Option<String>) {
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(text) else {
        return (None, (!text.trim().is_empty()).then(|| text.trim().to_string()), None);
    };
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str()))
            .map(str::to_string)
    };
    let code = field(&["__type", "code", "Code"]).map(|t| strip_error_type(&t));
    let message = field(&["message", "Message", "errorMessage"]);
    (code, message, None)
}

fn parse_xml_error(body: &str) -> (Option<String>, Option<String>, Option<String>) {
    use crate::protocol::xml::text;
    (
        text(body, "Code"),
        text(body, "Message"),
        text(body, "RequestId").or_else(|| text(body, "RequestID")),
    )
}
