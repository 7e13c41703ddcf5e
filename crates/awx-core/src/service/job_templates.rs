//! Job template endpoints beyond plain CRUD.

use tracing::{debug, info, instrument};

use super::Resources;
use crate::Result;
use crate::error::Error;
use crate::payload::Payload;
use crate::resources::{Credential, JobLaunch, JobTemplate, Page, Resource, Survey};
use crate::traits::{Requester, decode, decode_optional};
use crate::types::Query;

const LAUNCH: &str = "launch";
const CREDENTIALS: &str = "credentials";
const SURVEY_SPEC: &str = "survey_spec";

impl<R: Requester> Resources<R, JobTemplate> {
    /// Launch a job from the template.
    ///
    /// `payload` holds launch-time overrides (`extra_vars`, `limit`,
    /// `credentials`...); an empty payload launches with the template's
    /// own settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJobId`] if the server accepted the request
    /// but reported job id 0.
    #[instrument(skip(self, payload, query))]
    pub async fn launch(&self, id: u64, payload: Payload, query: &Query) -> Result<JobLaunch> {
        let path = JobTemplate::sub_path(id, LAUNCH);
        let body = payload.to_body()?;

        debug!("Launching job template");
        let response = self.requester.post(&path, body, query).await?;
        let launch: JobLaunch = decode(&path, &response)?;

        if launch.job == 0 {
            return Err(Error::InvalidJobId { job: launch.job });
        }

        info!(job = launch.job, "Job launched");
        Ok(launch)
    }

    /// Attach a credential; `payload` must name it by `id`.
    pub async fn associate_credential(
        &self,
        id: u64,
        payload: Payload,
    ) -> Result<Option<JobTemplate>> {
        self.associate(id, CREDENTIALS, payload).await
    }

    /// Detach a credential; `payload` must name it by `id`.
    pub async fn disassociate_credential(
        &self,
        id: u64,
        payload: Payload,
    ) -> Result<Option<JobTemplate>> {
        self.disassociate(id, CREDENTIALS, payload).await
    }

    /// One page of the credentials attached to the template.
    pub async fn list_credentials(&self, id: u64, query: &Query) -> Result<Page<Credential>> {
        self.list_related(id, CREDENTIALS, query).await
    }

    /// Fetch the template's whole survey.
    #[instrument(skip(self, query))]
    pub async fn get_survey(&self, id: u64, query: &Query) -> Result<Survey> {
        debug!("Getting survey");
        let path = JobTemplate::sub_path(id, SURVEY_SPEC);
        let response = self.requester.get(&path, query).await?;
        decode(&path, &response)
    }

    /// Replace the template's survey with `survey`.
    ///
    /// There is no per-question update; to change one question, fetch the
    /// survey, edit it and post it back whole.
    #[instrument(skip(self, survey, query), fields(questions = survey.spec.len()))]
    pub async fn set_survey(
        &self,
        id: u64,
        survey: &Survey,
        query: &Query,
    ) -> Result<Option<Survey>> {
        let path = JobTemplate::sub_path(id, SURVEY_SPEC);
        let body = serde_json::to_vec(survey).map_err(Error::Serialization)?;

        debug!("Replacing survey");
        let response = self.requester.post(&path, body, query).await?;
        decode_optional(&path, &response)
    }

    /// Remove the template's survey.
    #[instrument(skip(self))]
    pub async fn delete_survey(&self, id: u64) -> Result<Option<Survey>> {
        debug!("Deleting survey");
        let path = JobTemplate::sub_path(id, SURVEY_SPEC);
        let response = self.requester.delete(&path, &Query::new()).await?;
        decode_optional(&path, &response)
    }
}
