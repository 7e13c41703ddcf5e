//! Workflow node edges.

use tracing::instrument;

use super::Resources;
use crate::Result;
use crate::payload::Payload;
use crate::resources::{Page, WorkflowJobTemplateNode};
use crate::traits::Requester;
use crate::types::{LinkType, Query};

impl<R: Requester> Resources<R, WorkflowJobTemplateNode> {
    /// Add the node named by `payload["id"]` as a child of node `id` on the
    /// `link` edge (`always_nodes`, `success_nodes` or `failure_nodes`).
    ///
    /// The link type is checked before the payload; neither failure sends
    /// a request.
    #[instrument(skip(self, link, payload), fields(link = link.as_ref()))]
    pub async fn associate_node(
        &self,
        id: u64,
        link: impl AsRef<str> + Send,
        payload: Payload,
    ) -> Result<Option<WorkflowJobTemplateNode>> {
        let link = LinkType::new(link)?;
        self.associate(id, link.as_str(), payload).await
    }

    /// Remove the child named by `payload["id"]` from the `link` edge of
    /// node `id`.
    #[instrument(skip(self, link, payload), fields(link = link.as_ref()))]
    pub async fn disassociate_node(
        &self,
        id: u64,
        link: impl AsRef<str> + Send,
        payload: Payload,
    ) -> Result<Option<WorkflowJobTemplateNode>> {
        let link = LinkType::new(link)?;
        self.disassociate(id, link.as_str(), payload).await
    }

    /// One page of the children of node `id` on the `link` edge.
    #[instrument(skip(self, link, query), fields(link = link.as_ref()))]
    pub async fn list_linked_nodes(
        &self,
        id: u64,
        link: impl AsRef<str> + Send,
        query: &Query,
    ) -> Result<Page<WorkflowJobTemplateNode>> {
        let link = LinkType::new(link)?;
        self.list_related(id, link.as_str(), query).await
    }
}
