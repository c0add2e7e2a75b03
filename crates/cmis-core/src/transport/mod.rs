//! Transport seam between the session façade and an HTTP client.
//!
//! The session turns each CMIS call into a fully resolved [`Request`]; a
//! [`Transport`] only has to put it on the wire and hand back the raw
//! [`Response`]. Status checking and decoding stay in the façade.

mod auth;
mod request;
mod response;

use async_trait::async_trait;

use crate::error::TransportError;

pub use auth::Auth;
pub use request::{Body, ContentPart, Method, Multipart, Request};
pub use response::Response;

/// Sends one request and returns the raw response, whatever its status.
///
/// Implementations own retries, timeouts, pooling and cookie handling.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request.
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}
