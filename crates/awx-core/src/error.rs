//! Error types for the AWX client.
//!
//! One error type covers every failure an operation can report: payload
//! validation, serialization, transport, non-success responses from the
//! server, undecodable bodies and launches that produced no job.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The unified error type for AWX operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected locally before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The payload could not be encoded as JSON.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network transport errors (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A launch the server accepted but that produced no job.
    #[error("invalid job id {job}")]
    InvalidJobId { job: u64 },
}

impl Error {
    /// Returns true if the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Remote(e) if e.is_not_found())
    }
}

/// Errors detected locally, before a request is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Mandatory payload keys are absent.
    #[error("mandatory input arguments are absent: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A workflow node edge name outside the known set.
    #[error(
        "invalid link type '{value}': expected one of [always_nodes, success_nodes, failure_nodes]"
    )]
    LinkType { value: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A payload that is not a JSON object.
    #[error("invalid payload: {reason}")]
    Payload { reason: String },
}

/// Transport-level errors raised by a [`Requester`](crate::Requester).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Any other HTTP client failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the AWX server.
#[derive(Debug)]
pub struct RemoteError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` message AWX puts in most error bodies.
    pub detail: Option<String>,
    /// The decoded body, when it was JSON.
    pub body: Option<Value>,
}

impl RemoteError {
    /// Create a remote error from a status and raw response body.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let body: Option<Value> = serde_json::from_slice(body).ok();
        let detail = body
            .as_ref()
            .and_then(|b| b.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status,
            detail,
            body,
        }
    }

    /// Check if the server reported 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        } else if let Some(ref body) = self.body {
            // Field-level validation errors come back as an object of lists.
            write!(f, ": {}", body)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}
