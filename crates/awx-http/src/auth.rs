//! Request authentication.

use std::fmt;

use reqwest::RequestBuilder;

/// How requests authenticate against the server.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Auth {
    /// Send no credentials.
    #[default]
    None,
    /// HTTP basic auth with a local AWX user.
    Basic { username: String, password: String },
    /// OAuth2 personal access token, sent as a bearer token.
    Token(String),
}

impl Auth {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Auth::Token(token.into())
    }

    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Auth::None => request,
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
            Auth::Token(token) => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::None => f.write_str("None"),
            Auth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Auth::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
        }
    }
}
