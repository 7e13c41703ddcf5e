//! Connection profile and its resolution against command line flags.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use awx_core::{ApiUrl, AwxClient};
use awx_http::{Auth, Client, HttpRequester};

use crate::cli::ConnectionArgs;

/// Everything needed to reach one AWX server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub insecure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Merge command line flags over a saved profile.
    ///
    /// A flag always wins; `--insecure` can only switch certificate checks
    /// off, never back on.
    pub fn resolve(args: &ConnectionArgs, stored: Option<Profile>) -> Result<Profile> {
        let stored = stored.unwrap_or_default();

        let host = args
            .host
            .clone()
            .or(Some(stored.host).filter(|h| !h.is_empty()))
            .context("No AWX host. Pass --host, set AWX_HOST or run 'awx configure'.")?;

        ApiUrl::new(&host).context("Invalid AWX host")?;

        Ok(Profile {
            host,
            token: args.token.clone().or(stored.token),
            username: args.username.clone().or(stored.username),
            password: args.password.clone().or(stored.password),
            insecure: args.insecure || stored.insecure,
            timeout_secs: args.timeout.or(stored.timeout_secs),
        })
    }

    /// Credentials to send; a token takes precedence over a username.
    pub fn auth(&self) -> Result<Auth> {
        match (&self.token, &self.username, &self.password) {
            (Some(token), _, _) => Ok(Auth::token(token)),
            (None, Some(username), Some(password)) => Ok(Auth::basic(username, password)),
            (None, Some(_), None) => bail!("--username needs --password (or AWX_PASSWORD)"),
            (None, None, _) => Ok(Auth::None),
        }
    }

    /// Short description of the auth method, without secrets.
    pub fn auth_kind(&self) -> &'static str {
        match (&self.token, &self.username) {
            (Some(_), _) => "token",
            (None, Some(_)) => "basic",
            (None, None) => "none",
        }
    }

    /// Build a client for this profile.
    pub fn connect(&self) -> Result<Client> {
        let base = ApiUrl::new(&self.host).context("Invalid AWX host")?;

        let mut builder = HttpRequester::builder(base)
            .auth(self.auth()?)
            .accept_invalid_certs(self.insecure);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let requester = builder.build().context("Failed to build HTTP client")?;
        Ok(AwxClient::new(requester))
    }
}
