//! Core AWX client types.
//!
//! These types enforce their invariants at construction time, so an
//! invalid base URL or edge name never reaches a request.

mod api_url;
mod link_type;
mod query;

pub use api_url::ApiUrl;
pub use link_type::LinkType;
pub use query::Query;
