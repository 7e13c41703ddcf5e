//! awx-http - HTTP-backed requester for the AWX v2 API.

mod auth;
mod requester;

pub use auth::Auth;
pub use requester::{HttpRequester, HttpRequesterBuilder};

use awx_core::{ApiUrl, AwxClient, Result};

/// An AWX client talking HTTP.
pub type Client = AwxClient<HttpRequester>;

/// Build a client for `base` with default settings.
pub fn client(base: ApiUrl, auth: Auth) -> Result<Client> {
    let requester = HttpRequester::builder(base).auth(auth).build()?;
    Ok(AwxClient::new(requester))
}
