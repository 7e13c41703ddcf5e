//! Credential records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Resource, null_as_default};

/// A stored secret (machine, SCM, vault, cloud...) attachable to templates.
///
/// Secret inputs come back from the server as `$encrypted$`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default)]
    pub credential_type: Option<u64>,

    #[serde(default)]
    pub organization: Option<u64>,

    /// Short kind name such as `ssh` or `vault`.
    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Map<String, Value>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Credential {
    const COLLECTION: &'static str = "/api/v2/credentials/";
    const REQUIRED_ON_CREATE: &'static [&'static str] = &["name", "credential_type"];
}
