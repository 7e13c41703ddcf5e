//! awx-core - Core types, validation and resource services for the AWX v2 API.
//!
//! All requests flow through a [`Requester`], which owns the transport.
//! Services validate payloads, build paths and decode responses; they keep
//! no state between calls.
//!
//! # Example
//!
//! ```no_run
//! use awx_core::{AwxClient, Payload, Query, Requester};
//!
//! # async fn example<R: Requester>(requester: R) -> awx_core::Result<()> {
//! let client = AwxClient::new(requester);
//! let templates = client.job_templates();
//!
//! let page = templates.list(&Query::new().param("page_size", 50)).await?;
//! for template in &page.results {
//!     println!("{}: {}", template.id, template.name);
//! }
//!
//! let launch = templates
//!     .launch(7, Payload::new().field("limit", "web"), &Query::new())
//!     .await?;
//! println!("started job {}", launch.job);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod payload;
pub mod resources;
pub mod service;
pub mod traits;
pub mod types;

pub use client::AwxClient;
pub use error::{Error, RemoteError, TransportError, ValidationError};
pub use payload::Payload;
pub use resources::{
    Credential, JobLaunch, JobTemplate, Page, Resource, Survey, SurveyQuestion,
    WorkflowJobTemplateNode,
};
pub use service::{Credentials, JobTemplates, Resources, WorkflowJobTemplateNodes};
pub use traits::{Requester, Response, check_response};
pub use types::{ApiUrl, LinkType, Query};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
