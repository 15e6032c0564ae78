//! Discovery query building and search results.

use serde::{Deserialize, Serialize};

use super::Provider;

/// Default page size for discovery requests.
pub const DEFAULT_LIMIT: u32 = 20;

/// Parameters for a discovery request.
///
/// Ordering is delegated entirely to the backend via `sort_by`; this type
/// only builds the query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverQuery {
    pub query: Option<String>,
    pub location: Option<String>,
    pub sort_by: Option<String>,
    pub limit: u32,
    pub page: u32,
}

impl Default for DiscoverQuery {
    fn default() -> Self {
        Self {
            query: None,
            location: None,
            sort_by: None,
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

impl DiscoverQuery {
    /// Create a query with default paging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the location filter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the backend sort key.
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page number (1-based).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Render the query-string pairs for the discovery endpoint.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

/// Result of a discovery or search call.
///
/// The façade never fails: an error degrades to an empty outcome carrying a
/// human-readable `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub providers: Vec<Provider>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub message: Option<String>,
}

impl SearchOutcome {
    /// An empty outcome for the given paging, with no message.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            providers: Vec::new(),
            total: 0,
            page,
            limit,
            message: None,
        }
    }

    /// An empty outcome carrying a user-facing degradation message.
    pub fn degraded(page: u32, limit: u32, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(page, limit)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_include_only_set_filters() {
        let query = DiscoverQuery::new().with_query("plumbing").with_page(3);
        let pairs = query.to_query_pairs();

        assert!(pairs.contains(&("query", "plumbing".to_string())));
        assert!(pairs.contains(&("limit", "20".to_string())));
        assert!(pairs.contains(&("page", "3".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "location"));
        assert!(!pairs.iter().any(|(k, _)| *k == "sort_by"));
    }

    #[test]
    fn test_degraded_outcome() {
        let outcome = SearchOutcome::degraded(1, 20, "Something went wrong.");

        assert!(outcome.is_empty());
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.message.as_deref(), Some("Something went wrong."));
    }
}
