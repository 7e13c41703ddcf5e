//! Requester trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::Result;
use crate::error::{Error, RemoteError};
use crate::types::Query;

/// A raw response as returned by a [`Requester`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body; empty for `204 No Content`.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the body carries nothing to decode.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Transport to an AWX server.
///
/// Implementations own the base URL, authentication, timeouts and
/// connection reuse. Paths are absolute API paths such as
/// `/api/v2/job_templates/3/`; query parameters are forwarded untouched.
///
/// A requester only fails for transport problems. Status codes are
/// reported in the [`Response`] and judged by [`check_response`].
#[async_trait]
pub trait Requester: Send + Sync {
    /// Issue a GET.
    async fn get(&self, path: &str, query: &Query) -> Result<Response>;

    /// Issue a POST with a JSON body.
    async fn post(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response>;

    /// Issue a PATCH with a JSON body.
    async fn patch(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response>;

    /// Issue a DELETE.
    async fn delete(&self, path: &str, query: &Query) -> Result<Response>;
}

#[async_trait]
impl<T: Requester + ?Sized> Requester for Arc<T> {
    async fn get(&self, path: &str, query: &Query) -> Result<Response> {
        (**self).get(path, query).await
    }

    async fn post(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response> {
        (**self).post(path, body, query).await
    }

    async fn patch(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response> {
        (**self).patch(path, body, query).await
    }

    async fn delete(&self, path: &str, query: &Query) -> Result<Response> {
        (**self).delete(path, query).await
    }
}

/// Turn a non-2xx response into a [`RemoteError`].
pub fn check_response(response: &Response) -> Result<()> {
    trace!(status = response.status, "AWX response");

    if response.is_success() {
        Ok(())
    } else {
        Err(Error::Remote(RemoteError::from_body(
            response.status,
            &response.body,
        )))
    }
}

/// Check the status, then decode the body as `T`.
pub fn decode<T: DeserializeOwned>(path: &str, response: &Response) -> Result<T> {
    check_response(response)?;
    serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
        path: path.to_string(),
        source,
    })
}

/// Like [`decode`], but an empty body yields `None`.
pub fn decode_optional<T: DeserializeOwned>(path: &str, response: &Response) -> Result<Option<T>> {
    check_response(response)?;
    if response.is_empty() {
        return Ok(None);
    }
    decode(path, response).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn success_range() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(302, "").is_success());
        assert!(!Response::new(404, "").is_success());
    }

    #[test]
    fn check_response_maps_status() {
        let err = check_response(&Response::new(403, r#"{"detail":"nope"}"#)).unwrap_err();
        match err {
            Error::Remote(remote) => {
                assert_eq!(remote.status, 403);
                assert!(remote.is_auth_error());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_reports_path() {
        let err = decode::<Value>("/api/v2/job_templates/", &Response::new(200, "<html>"))
            .unwrap_err();
        assert!(matches!(err, Error::Decode { ref path, .. } if path == "/api/v2/job_templates/"));
    }

    #[test]
    fn decode_optional_empty_body() {
        let value: Option<Value> = decode_optional("/x/", &Response::new(204, "")).unwrap();
        assert!(value.is_none());
        let value: Option<Value> = decode_optional("/x/", &Response::new(200, "{}")).unwrap();
        assert!(value.is_some());
    }
}
