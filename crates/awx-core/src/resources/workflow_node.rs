//! Workflow job template nodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Resource, null_as_default};
use crate::types::LinkType;

/// One node of a workflow graph, pointing at the template it runs and at
/// its children on each kind of edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowJobTemplateNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(default)]
    pub workflow_job_template: Option<u64>,

    #[serde(default)]
    pub unified_job_template: Option<u64>,

    /// Stable identifier, unique within the workflow.
    #[serde(default)]
    pub identifier: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success_nodes: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub failure_nodes: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub always_nodes: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub all_parents_must_converge: bool,

    #[serde(default)]
    pub extra_data: Value,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowJobTemplateNode {
    /// Child node ids on the given edge.
    pub fn children(&self, link: LinkType) -> &[u64] {
        match link {
            LinkType::Always => &self.always_nodes,
            LinkType::Success => &self.success_nodes,
            LinkType::Failure => &self.failure_nodes,
        }
    }
}

impl Resource for WorkflowJobTemplateNode {
    const COLLECTION: &'static str = "/api/v2/workflow_job_template_nodes/";
    const REQUIRED_ON_CREATE: &'static [&'static str] =
        &["workflow_job_template", "unified_job_template", "identifier"];
}
