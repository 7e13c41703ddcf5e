//! Generic resource service.
//!
//! [`Resources`] implements the operations every AWX collection shares
//! (get, list, create, update, delete, associate, disassociate) once, for
//! any [`Resource`]. Type-specific endpoints such as template launch or
//! workflow edges live in inherent impls on the concrete instantiation.

mod job_templates;
mod workflow_nodes;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::Result;
use crate::payload::Payload;
use crate::resources::{Credential, JobTemplate, Page, Resource, WorkflowJobTemplateNode};
use crate::traits::{Requester, decode, decode_optional};
use crate::types::Query;

/// Service for job templates.
pub type JobTemplates<R> = Resources<R, JobTemplate>;

/// Service for workflow job template nodes.
pub type WorkflowJobTemplateNodes<R> = Resources<R, WorkflowJobTemplateNode>;

/// Service for credentials.
pub type Credentials<R> = Resources<R, Credential>;

/// Key the server expects in a relation POST that links two records.
const ASSOCIATE: &str = "associate";

/// Key the server expects in a relation POST that unlinks two records.
const DISASSOCIATE: &str = "disassociate";

/// Keys every associate/disassociate payload must carry.
const LINK_REQUIRED: &[&str] = &["id"];

/// Operations on one AWX collection.
///
/// Each call is a single request; nothing is cached or retried.
pub struct Resources<R, T> {
    requester: Arc<R>,
    _resource: PhantomData<fn() -> T>,
}

impl<R, T> Resources<R, T> {
    /// Create a service over a shared requester.
    pub fn new(requester: Arc<R>) -> Self {
        Self {
            requester,
            _resource: PhantomData,
        }
    }

    /// Returns the requester this service sends through.
    pub fn requester(&self) -> &Arc<R> {
        &self.requester
    }
}

impl<R, T> Clone for Resources<R, T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.requester))
    }
}

impl<R, T: Resource> fmt::Debug for Resources<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("collection", &T::COLLECTION)
            .finish()
    }
}

impl<R: Requester, T: Resource> Resources<R, T> {
    /// Fetch one record by id.
    #[instrument(skip(self, query), fields(collection = T::COLLECTION))]
    pub async fn get(&self, id: u64, query: &Query) -> Result<T> {
        debug!("Getting record");
        let path = T::item_path(id);
        let response = self.requester.get(&path, query).await?;
        decode(&path, &response)
    }

    /// Fetch one page of the collection.
    ///
    /// Exactly one request is made; use [`Page::next_query`] to ask for
    /// the following page.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn list(&self, query: &Query) -> Result<Page<T>> {
        debug!("Listing records");
        let response = self.requester.get(T::COLLECTION, query).await?;
        decode(T::COLLECTION, &response)
    }

    /// Create a record.
    ///
    /// # Errors
    ///
    /// Fails without sending anything if the payload lacks one of
    /// [`Resource::REQUIRED_ON_CREATE`].
    #[instrument(skip(self, payload, query), fields(collection = T::COLLECTION))]
    pub async fn create(&self, payload: Payload, query: &Query) -> Result<T> {
        payload.require(T::REQUIRED_ON_CREATE)?;
        let body = payload.to_body()?;

        debug!("Creating record");
        let response = self.requester.post(T::COLLECTION, body, query).await?;
        decode(T::COLLECTION, &response)
    }

    /// Change the given fields of a record; the server leaves the rest alone.
    #[instrument(skip(self, payload, query), fields(collection = T::COLLECTION))]
    pub async fn update(&self, id: u64, payload: Payload, query: &Query) -> Result<T> {
        let path = T::item_path(id);
        let body = payload.to_body()?;

        debug!("Updating record");
        let response = self.requester.patch(&path, body, query).await?;
        decode(&path, &response)
    }

    /// Delete a record.
    ///
    /// Returns the body the server sent back, which is usually nothing.
    /// Deleting an already deleted record reports whatever the server says.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn delete(&self, id: u64) -> Result<Option<T>> {
        debug!("Deleting record");
        let path = T::item_path(id);
        let response = self.requester.delete(&path, &Query::new()).await?;
        decode_optional(&path, &response)
    }

    /// Link the record named by `payload["id"]` to this record's `relation`.
    ///
    /// Returns the record the server sent back; AWX usually answers with
    /// an empty `204`, giving `None`.
    #[instrument(skip(self, payload), fields(collection = T::COLLECTION))]
    pub async fn associate(
        &self,
        id: u64,
        relation: &str,
        payload: Payload,
    ) -> Result<Option<T>> {
        self.link(id, relation, ASSOCIATE, payload).await
    }

    /// Unlink the record named by `payload["id"]` from this record's
    /// `relation`. The server expects a POST, not a DELETE.
    #[instrument(skip(self, payload), fields(collection = T::COLLECTION))]
    pub async fn disassociate(
        &self,
        id: u64,
        relation: &str,
        payload: Payload,
    ) -> Result<Option<T>> {
        self.link(id, relation, DISASSOCIATE, payload).await
    }

    /// Fetch one page of the records linked through `relation`.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn list_related<U: DeserializeOwned>(
        &self,
        id: u64,
        relation: &str,
        query: &Query,
    ) -> Result<Page<U>> {
        debug!("Listing related records");
        let path = T::sub_path(id, relation);
        let response = self.requester.get(&path, query).await?;
        decode(&path, &response)
    }

    async fn link(
        &self,
        id: u64,
        relation: &str,
        flag: &str,
        mut payload: Payload,
    ) -> Result<Option<T>> {
        payload.require(LINK_REQUIRED)?;
        payload.insert(flag, true);
        let body = payload.to_body()?;

        let path = T::sub_path(id, relation);
        debug!(%path, flag, "Posting relation change");
        let response = self.requester.post(&path, body, &Query::new()).await?;
        decode_optional(&path, &response)
    }
}
