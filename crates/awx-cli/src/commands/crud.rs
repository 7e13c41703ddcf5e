//! Get/list/create/update/delete, shared by every resource command.

use std::future::Future;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use awx_core::{Page, Query, Resource, Resources};
use awx_http::HttpRequester;

use super::input::{PayloadArgs, QueryArgs};
use crate::output;

#[derive(Subcommand, Debug)]
pub enum CrudCommand {
    /// Fetch one record
    Get(GetArgs),

    /// List records
    List(ListArgs),

    /// Create a record
    Create(CreateArgs),

    /// Change fields of a record
    Update(UpdateArgs),

    /// Delete a record
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Record id
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: u64,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Follow `next` links and print every page
    #[arg(long)]
    pub all: bool,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: u64,

    #[command(flatten)]
    pub payload: PayloadArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

pub async fn run<T>(service: &Resources<HttpRequester, T>, cmd: CrudCommand) -> Result<()>
where
    T: Resource + Serialize,
{
    match cmd {
        CrudCommand::Get(args) => {
            let record = service
                .get(args.id, &args.query.query()?)
                .await
                .with_context(|| format!("Failed to get {}", args.id))?;
            output::json_pretty(&record)
        }
        CrudCommand::List(args) => {
            let query = args.query.query()?;
            print_pages(query, &args, |query| {
                let service = service.clone();
                async move { service.list(&query).await }
            })
            .await
            .context("Failed to list records")
        }
        CrudCommand::Create(args) => {
            let record = service
                .create(args.payload.payload()?, &args.query.query()?)
                .await
                .context("Failed to create record")?;
            output::json_pretty(&record)
        }
        CrudCommand::Update(args) => {
            let record = service
                .update(args.id, args.payload.payload()?, &args.query.query()?)
                .await
                .with_context(|| format!("Failed to update {}", args.id))?;
            output::json_pretty(&record)
        }
        CrudCommand::Delete(args) => {
            let body = service
                .delete(args.id)
                .await
                .with_context(|| format!("Failed to delete {}", args.id))?;
            output::record_or_success(body.as_ref(), &format!("Deleted {}", args.id))
        }
    }
}

/// Print the records of one page, or of every page with `--all`.
///
/// Each record is one line of JSON unless `--pretty` is given.
pub async fn print_pages<T, F, Fut>(mut query: Query, args: &ListArgs, mut fetch: F) -> Result<()>
where
    T: Serialize,
    F: FnMut(Query) -> Fut,
    Fut: Future<Output = awx_core::Result<Page<T>>>,
{
    let mut printed = 0usize;

    loop {
        let page = fetch(query).await?;
        let next = page.next_query();
        let count = page.count;

        for record in &page.results {
            if args.pretty {
                output::json_pretty(record)?;
            } else {
                output::json(record)?;
            }
        }
        printed += page.results.len();

        match next {
            Some(next) if args.all => query = next,
            Some(next) => {
                output::note(&format!(
                    "Showing {printed} of {count}; use --all or --query page={}",
                    next.get("page").unwrap_or("?")
                ));
                return Ok(());
            }
            None => {
                if printed == 0 {
                    output::note("No records found.");
                }
                return Ok(());
            }
        }
    }
}
