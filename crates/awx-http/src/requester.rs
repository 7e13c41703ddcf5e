//! reqwest-backed [`Requester`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use tracing::{debug, instrument, trace};

use awx_core::error::TransportError;
use awx_core::traits::{Requester, Response};
use awx_core::types::{ApiUrl, Query};
use awx_core::{Error, Result};

use crate::auth::Auth;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const APPLICATION_JSON: &str = "application/json";

/// HTTP transport to one AWX server.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpRequester {
    client: reqwest::Client,
    base: ApiUrl,
    auth: Auth,
}

/// Builder for [`HttpRequester`].
#[derive(Debug, Clone)]
pub struct HttpRequesterBuilder {
    base: ApiUrl,
    auth: Auth,
    timeout: Duration,
    user_agent: String,
    accept_invalid_certs: bool,
}

impl HttpRequesterBuilder {
    /// Credentials sent with every request.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Total time allowed for one request, including reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Skip TLS certificate verification, for servers with self-signed
    /// certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<HttpRequester> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(transport_error)?;

        Ok(HttpRequester {
            client,
            base: self.base,
            auth: self.auth,
        })
    }
}

impl HttpRequester {
    /// Start configuring a requester for the server at `base`.
    pub fn builder(base: ApiUrl) -> HttpRequesterBuilder {
        HttpRequesterBuilder {
            base,
            auth: Auth::None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("awx-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_invalid_certs: false,
        }
    }

    /// Create an unauthenticated requester with default settings.
    pub fn new(base: ApiUrl) -> Result<Self> {
        Self::builder(base).build()
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base
    }

    #[instrument(skip(self, body, query), fields(base = %self.base))]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        query: &Query,
    ) -> Result<Response> {
        let url = self.base.endpoint(path);
        debug!(%method, %url, "AWX request");
        trace!(?query, "query parameters");

        let mut request = self
            .client
            .request(method, &url)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(body);
        }
        let request = self.auth.apply(request);

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        trace!(status, bytes = body.len(), "AWX response");

        Ok(Response::new(status, body.to_vec()))
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn get(&self, path: &str, query: &Query) -> Result<Response> {
        self.send(Method::GET, path, None, query).await
    }

    async fn post(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response> {
        self.send(Method::POST, path, Some(body), query).await
    }

    async fn patch(&self, path: &str, body: Vec<u8>, query: &Query) -> Result<Response> {
        self.send(Method::PATCH, path, Some(body), query).await
    }

    async fn delete(&self, path: &str, query: &Query) -> Result<Response> {
        self.send(Method::DELETE, path, None, query).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}
