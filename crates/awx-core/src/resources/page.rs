//! Paginated list envelope.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::types::Query;

/// One page of a list endpoint.
///
/// The client never follows `next` on its own; pass
/// [`next_query`](Page::next_query) to the next `list` call to walk the
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records matching the query across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,

    /// Link to the following page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// Link to the preceding page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// The records in this page, in server order.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if the server advertised another page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Query parameters that request the following page.
    pub fn next_query(&self) -> Option<Query> {
        self.next.as_deref().map(Query::from_link)
    }

    /// Query parameters that request the preceding page.
    pub fn previous_query(&self) -> Option<Query> {
        self.previous.as_deref().map(Query::from_link)
    }

    /// Consume the page, keeping only its records.
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_envelope() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "count": 3,
            "next": "/api/v2/job_templates/?page=2&page_size=2",
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();

        assert_eq!(page.count, 3);
        assert_eq!(page.results.len(), 2);
        assert!(page.has_next());

        let next = page.next_query().unwrap();
        assert_eq!(next.get("page"), Some("2"));
        assert_eq!(next.get("page_size"), Some("2"));
        assert!(page.previous_query().is_none());
    }

    #[test]
    fn last_page_has_no_next() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({"count": 0, "results": []})).unwrap();
        assert!(!page.has_next());
        assert!(page.next_query().is_none());
    }
}
