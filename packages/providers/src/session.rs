//! Search-session continuity.
//!
//! The services page keeps its last search state around so back/forward
//! navigation restores results instead of re-querying. This is the
//! in-memory equivalent of that per-session storage slot.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::types::Provider;

/// The last services-page search for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// The service name the user searched for.
    pub service_name: String,
    pub results: Vec<Provider>,
    /// The degradation message shown, if the search failed.
    pub error: Option<String>,
}

/// In-memory store of per-session search state.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SearchState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the search state for a session, replacing any previous one.
    pub fn save(&self, session: &str, state: SearchState) {
        self.inner
            .write()
            .unwrap()
            .insert(session.to_string(), state);
    }

    /// Restore the last search state for a session.
    pub fn restore(&self, session: &str) -> Option<SearchState> {
        self.inner.read().unwrap().get(session).cloned()
    }

    /// Drop the stored state for a session.
    pub fn clear(&self, session: &str) {
        self.inner.write().unwrap().remove(session);
    }

    /// Number of sessions with stored state.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore_clear() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let state = SearchState {
            service_name: "plumbing".into(),
            results: vec![],
            error: None,
        };
        store.save("session-1", state.clone());

        assert_eq!(store.restore("session-1"), Some(state));
        assert_eq!(store.restore("session-2"), None);
        assert_eq!(store.len(), 1);

        store.clear("session-1");
        assert!(store.restore("session-1").is_none());
    }

    #[test]
    fn test_save_replaces_previous_state() {
        let store = SessionStore::new();

        store.save(
            "s",
            SearchState {
                service_name: "roofing".into(),
                ..Default::default()
            },
        );
        store.save(
            "s",
            SearchState {
                service_name: "wiring".into(),
                ..Default::default()
            },
        );

        assert_eq!(store.restore("s").unwrap().service_name, "wiring");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();

        store.save("s", SearchState::default());

        assert!(other.restore("s").is_some());
    }
}
