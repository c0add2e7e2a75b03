//! Error types for the CMIS façade.
//!
//! Every failure is reported through one [`Error`] enum with explicit variants
//! for transport, HTTP, decoding and input validation errors.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::transport::Response;

/// The unified error type for CMIS operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The repository answered with a status outside `200..=299`.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An operation needed the default repository before one was loaded.
    #[error("repository not loaded: call load_repositories() first")]
    NotConnected,

    /// A successful response carried a body that could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller input rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP error if this failure came from a non-2xx response.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Error::Http(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if any.
    pub fn status(&self) -> Option<u16> {
        self.as_http().map(HttpError::status)
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// DNS resolution failed.
    #[error("DNS resolution failed: {host}")]
    Dns { host: String },

    /// TLS/SSL error.
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The request could not be built or sent.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A response whose status fell outside `200..=299`.
///
/// The raw response is kept intact so callers can read the repository's own
/// exception payload.
#[derive(Debug, Clone)]
pub struct HttpError {
    response: Response,
}

impl HttpError {
    /// Wrap a failed response.
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// The raw response as received from the transport.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Consume the error, returning the raw response.
    pub fn into_response(self) -> Response {
        self.response
    }

    /// Parse the response body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        self.response.json()
    }

    /// The response body as lossy UTF-8 text.
    pub fn text(&self) -> String {
        self.response.text()
    }

    /// The repository-reported exception, when the body carries one.
    ///
    /// CMIS servers answer failures with `{"exception": "...", "message": "..."}`.
    pub fn exception(&self) -> Option<CmisException> {
        serde_json::from_slice::<CmisException>(&self.response.body).ok()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.response.status)?;
        if !self.response.reason.is_empty() {
            write!(f, " {}", self.response.reason)?;
        }
        if let Some(exception) = self.exception() {
            write!(f, " [{}]", exception.exception)?;
            if let Some(message) = exception.message {
                write!(f, ": {}", message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

/// Machine-readable failure reported by a CMIS repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CmisException {
    /// Exception name, e.g. `notSupported`, `invalidArgument`, `constraint`.
    pub exception: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

impl CmisException {
    /// True for `notSupported`, which callers commonly treat as a soft failure.
    pub fn is_not_supported(&self) -> bool {
        self.exception == "notSupported"
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// The requested repository is not among the loaded ones.
    #[error("unknown repository '{id}'")]
    UnknownRepository { id: String },
}
