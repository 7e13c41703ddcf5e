//! Job template records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Resource, null_as_default};

/// A reusable job configuration the server can launch.
///
/// Attributes not modelled here are kept in `extra`, so a decoded template
/// carries every field the server returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// `run` or `check`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_type: String,

    #[serde(default)]
    pub inventory: Option<u64>,

    #[serde(default)]
    pub project: Option<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub playbook: String,

    /// Extra variables as the YAML or JSON text the server stores.
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_vars: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub survey_enabled: bool,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for JobTemplate {
    const COLLECTION: &'static str = "/api/v2/job_templates/";
    const REQUIRED_ON_CREATE: &'static [&'static str] =
        &["name", "job_type", "inventory", "project"];
}

/// Response of a template launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLaunch {
    /// Id of the job that was started; 0 when the server sent none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub job: u64,

    /// Launch-time fields the server refused to apply.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ignored_fields: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
