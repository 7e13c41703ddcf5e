//! Subcommand implementations.

pub mod configure;
pub mod credential;
pub mod job_template;
pub mod node;

mod crud;
mod input;

use anyhow::{Context, Result};

use awx_http::Client;

use crate::cli::ConnectionArgs;
use crate::profile::{Profile, storage};

/// Connect using the saved profile overlaid with command line flags.
fn connect(connection: &ConnectionArgs) -> Result<Client> {
    let stored = storage::load_profile().context("Failed to load profile")?;
    let profile = Profile::resolve(connection, stored)?;

    tracing::debug!(host = %profile.host, auth = profile.auth_kind(), "Connecting");
    profile.connect()
}
