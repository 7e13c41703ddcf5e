//! Workflow job template node commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use awx_core::Payload;

use super::crud::{self, CrudCommand, ListArgs};
use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct NodeCommand {
    #[command(subcommand)]
    pub command: NodeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NodeSubcommand {
    #[command(flatten)]
    Crud(CrudCommand),

    /// Add a child node on an edge
    Link(EdgeArgs),

    /// Remove a child node from an edge
    Unlink(EdgeArgs),

    /// List the children of a node on an edge
    Links(LinksArgs),
}

#[derive(Args, Debug)]
pub struct EdgeArgs {
    /// Parent node id
    pub id: u64,

    /// Edge: always_nodes, success_nodes or failure_nodes
    pub link: String,

    /// Child node id
    pub child: u64,
}

#[derive(Args, Debug)]
pub struct LinksArgs {
    /// Parent node id
    pub id: u64,

    /// Edge: always_nodes, success_nodes or failure_nodes
    pub link: String,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn handle(connection: &ConnectionArgs, cmd: NodeCommand) -> Result<()> {
    let client = super::connect(connection)?;
    let nodes = client.workflow_job_template_nodes();

    match cmd.command {
        NodeSubcommand::Crud(cmd) => crud::run(&nodes, cmd).await,
        NodeSubcommand::Link(args) => {
            let node = nodes
                .associate_node(args.id, &args.link, Payload::new().field("id", args.child))
                .await
                .with_context(|| format!("Failed to link node {} to {}", args.child, args.id))?;

            output::record_or_success(
                node.as_ref(),
                &format!("Linked node {} to {} on {}", args.child, args.id, args.link),
            )
        }
        NodeSubcommand::Unlink(args) => {
            let node = nodes
                .disassociate_node(args.id, &args.link, Payload::new().field("id", args.child))
                .await
                .with_context(|| {
                    format!("Failed to unlink node {} from {}", args.child, args.id)
                })?;

            output::record_or_success(
                node.as_ref(),
                &format!(
                    "Unlinked node {} from {} on {}",
                    args.child, args.id, args.link
                ),
            )
        }
        NodeSubcommand::Links(args) => {
            let id = args.id;
            let query = args.list.query.query()?;
            crud::print_pages(query, &args.list, |query| {
                let nodes = nodes.clone();
                let link = args.link.clone();
                async move { nodes.list_linked_nodes(id, link, &query).await }
            })
            .await
            .context("Failed to list linked nodes")
        }
    }
}
