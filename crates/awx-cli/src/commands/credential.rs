//! Credential commands.

use anyhow::Result;
use clap::Args;

use super::crud::{self, CrudCommand};
use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct CredentialCommand {
    #[command(subcommand)]
    pub command: CrudCommand,
}

pub async fn handle(connection: &ConnectionArgs, cmd: CredentialCommand) -> Result<()> {
    let client = super::connect(connection)?;
    crud::run(&client.credentials(), cmd.command).await
}
