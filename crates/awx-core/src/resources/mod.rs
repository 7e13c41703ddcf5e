//! AWX resource records and their endpoints.
//!
//! Every record type implements [`Resource`], which is all the generic
//! [`Resources`](crate::Resources) service needs to know about it: where
//! its collection lives and which keys a create payload must carry.

mod credential;
mod job_template;
mod page;
mod survey;
mod workflow_node;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub use credential::Credential;
pub use job_template::{JobLaunch, JobTemplate};
pub use page::Page;
pub use survey::{Survey, SurveyQuestion};
pub use workflow_node::WorkflowJobTemplateNode;

/// Decode `null` as the type's default, like a missing key.
///
/// AWX sends `null` for unset scalars; `#[serde(default)]` alone only
/// covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record type served from a versioned AWX collection endpoint.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Collection path, with leading and trailing slash.
    const COLLECTION: &'static str;

    /// Keys a create payload must contain.
    const REQUIRED_ON_CREATE: &'static [&'static str];

    /// Path of a single record.
    fn item_path(id: u64) -> String {
        format!("{}{}/", Self::COLLECTION, id)
    }

    /// Path of a sub-resource or relation below a record.
    fn sub_path(id: u64, suffix: &str) -> String {
        format!("{}{}/{}/", Self::COLLECTION, id, suffix.trim_matches('/'))
    }
}
