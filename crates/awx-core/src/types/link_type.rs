//! Workflow node edge type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};

/// The kind of edge between two workflow job template nodes.
///
/// The string form doubles as the relation path segment on the node
/// endpoint (`/api/v2/workflow_job_template_nodes/{id}/success_nodes/`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// Run the child regardless of the parent's outcome.
    #[serde(rename = "always_nodes")]
    Always,
    /// Run the child when the parent succeeds.
    #[serde(rename = "success_nodes")]
    Success,
    /// Run the child when the parent fails.
    #[serde(rename = "failure_nodes")]
    Failure,
}

impl LinkType {
    /// All link types, in the order AWX documents them.
    pub const ALL: [LinkType; 3] = [LinkType::Always, LinkType::Success, LinkType::Failure];

    /// Parse a link type from its relation name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LinkType`] for anything but
    /// `always_nodes`, `success_nodes` or `failure_nodes`.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        match s {
            "always_nodes" => Ok(LinkType::Always),
            "success_nodes" => Ok(LinkType::Success),
            "failure_nodes" => Ok(LinkType::Failure),
            _ => Err(ValidationError::LinkType {
                value: s.to_string(),
            }
            .into()),
        }
    }

    /// Returns the relation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Always => "always_nodes",
            LinkType::Success => "success_nodes",
            LinkType::Failure => "failure_nodes",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LinkType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
