//! Entry point bundling the resource services over one requester.

use std::sync::Arc;

use crate::service::{Credentials, JobTemplates, WorkflowJobTemplateNodes};
use crate::traits::Requester;

/// AWX API client.
///
/// Cheap to clone; every clone and every service handed out shares the
/// same requester.
#[derive(Debug)]
pub struct AwxClient<R> {
    requester: Arc<R>,
}

impl<R> Clone for AwxClient<R> {
    fn clone(&self) -> Self {
        Self {
            requester: Arc::clone(&self.requester),
        }
    }
}

impl<R: Requester> AwxClient<R> {
    /// Create a client that sends every request through `requester`.
    pub fn new(requester: R) -> Self {
        Self::from_arc(Arc::new(requester))
    }

    /// Create a client over an already shared requester.
    pub fn from_arc(requester: Arc<R>) -> Self {
        Self { requester }
    }

    /// Returns the underlying requester.
    pub fn requester(&self) -> &R {
        &self.requester
    }

    /// `/api/v2/job_templates/`
    pub fn job_templates(&self) -> JobTemplates<R> {
        JobTemplates::new(Arc::clone(&self.requester))
    }

    /// `/api/v2/workflow_job_template_nodes/`
    pub fn workflow_job_template_nodes(&self) -> WorkflowJobTemplateNodes<R> {
        WorkflowJobTemplateNodes::new(Arc::clone(&self.requester))
    }

    /// `/api/v2/credentials/`
    pub fn credentials(&self) -> Credentials<R> {
        Credentials::new(Arc::clone(&self.requester))
    }
}
