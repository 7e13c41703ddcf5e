//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::configure::{ConfigureArgs, ProfileArgs};
use crate::commands::credential::CredentialCommand;
use crate::commands::job_template::JobTemplateCommand;
use crate::commands::node::NodeCommand;

/// Command line client for the AWX v2 API.
#[derive(Parser, Debug)]
#[command(name = "awx")]
#[command(author, version = env!("AWX_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings; each one overrides the saved profile.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// AWX base URL (e.g. https://awx.example.com)
    #[arg(long, env = "AWX_HOST", global = true)]
    pub host: Option<String>,

    /// OAuth2 or personal access token
    #[arg(long, env = "AWX_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Username for basic auth
    #[arg(long, env = "AWX_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for basic auth
    #[arg(long, env = "AWX_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save connection settings to the profile
    Configure(ConfigureArgs),

    /// Show or clear the saved profile
    Profile(ProfileArgs),

    /// Job template operations
    JobTemplate(JobTemplateCommand),

    /// Workflow job template node operations
    Node(NodeCommand),

    /// Credential operations
    Credential(CredentialCommand),
}
