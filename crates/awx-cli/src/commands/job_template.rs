//! Job template commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use awx_core::{Payload, Query, Survey};

use super::crud::{self, CrudCommand, ListArgs};
use super::input::{self, PayloadArgs, QueryArgs};
use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct JobTemplateCommand {
    #[command(subcommand)]
    pub command: JobTemplateSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobTemplateSubcommand {
    #[command(flatten)]
    Crud(CrudCommand),

    /// Launch a job from a template
    Launch(LaunchArgs),

    /// Attach a credential to a template
    AssociateCredential(CredentialLinkArgs),

    /// Detach a credential from a template
    DisassociateCredential(CredentialLinkArgs),

    /// List the credentials attached to a template
    Credentials(CredentialsArgs),

    /// Survey operations
    Survey(SurveyCommand),
}

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Job template id
    pub id: u64,

    /// Launch-time overrides (extra_vars, limit, ...)
    #[command(flatten)]
    pub payload: PayloadArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args, Debug)]
pub struct CredentialLinkArgs {
    /// Job template id
    pub id: u64,

    /// Credential id
    #[arg(long)]
    pub credential: u64,
}

#[derive(Args, Debug)]
pub struct CredentialsArgs {
    /// Job template id
    pub id: u64,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct SurveyCommand {
    #[command(subcommand)]
    pub command: SurveySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SurveySubcommand {
    /// Show a template's survey
    Get(SurveyIdArgs),

    /// Replace a template's survey with a JSON document
    Set(SurveySetArgs),

    /// Remove a template's survey
    Delete(SurveyIdArgs),
}

#[derive(Args, Debug)]
pub struct SurveyIdArgs {
    /// Job template id
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct SurveySetArgs {
    /// Job template id
    pub id: u64,

    /// Survey document ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub json: PathBuf,
}

pub async fn handle(connection: &ConnectionArgs, cmd: JobTemplateCommand) -> Result<()> {
    let client = super::connect(connection)?;
    let templates = client.job_templates();

    match cmd.command {
        JobTemplateSubcommand::Crud(cmd) => crud::run(&templates, cmd).await,
        JobTemplateSubcommand::Launch(args) => {
            let launch = templates
                .launch(args.id, args.payload.payload()?, &args.query.query()?)
                .await
                .with_context(|| format!("Failed to launch job template {}", args.id))?;

            output::success(&format!("Launched job {}", launch.job));
            output::json_pretty(&launch)
        }
        JobTemplateSubcommand::AssociateCredential(args) => {
            let template = templates
                .associate_credential(args.id, Payload::new().field("id", args.credential))
                .await
                .context("Failed to attach credential")?;

            output::record_or_success(
                template.as_ref(),
                &format!(
                    "Attached credential {} to job template {}",
                    args.credential, args.id
                ),
            )
        }
        JobTemplateSubcommand::DisassociateCredential(args) => {
            let template = templates
                .disassociate_credential(args.id, Payload::new().field("id", args.credential))
                .await
                .context("Failed to detach credential")?;

            output::record_or_success(
                template.as_ref(),
                &format!(
                    "Detached credential {} from job template {}",
                    args.credential, args.id
                ),
            )
        }
        JobTemplateSubcommand::Credentials(args) => {
            let id = args.id;
            let query = args.list.query.query()?;
            crud::print_pages(query, &args.list, |query| {
                let templates = templates.clone();
                async move { templates.list_credentials(id, &query).await }
            })
            .await
            .context("Failed to list credentials")
        }
        JobTemplateSubcommand::Survey(survey) => match survey.command {
            SurveySubcommand::Get(args) => {
                let survey = templates
                    .get_survey(args.id, &Query::new())
                    .await
                    .context("Failed to get survey")?;
                output::json_pretty(&survey)
            }
            SurveySubcommand::Set(args) => {
                let survey: Survey = serde_json::from_value(input::read_json(&args.json)?)
                    .context("Not a survey document")?;
                let echoed = templates
                    .set_survey(args.id, &survey, &Query::new())
                    .await
                    .context("Failed to set survey")?;

                output::record_or_success(
                    echoed.as_ref(),
                    &format!(
                        "Set survey with {} questions on job template {}",
                        survey.spec.len(),
                        args.id
                    ),
                )
            }
            SurveySubcommand::Delete(args) => {
                templates
                    .delete_survey(args.id)
                    .await
                    .context("Failed to delete survey")?;
                output::success(&format!("Deleted survey of job template {}", args.id));
                Ok(())
            }
        },
    }
}
