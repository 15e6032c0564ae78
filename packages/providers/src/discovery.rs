//! Discovery façade.
//!
//! The one layer the product UI talks to for search. Every failure path
//! degrades to an empty result carrying a human-readable message; no
//! [`ApiError`] crosses this boundary.

use std::sync::Arc;

use tracing::{debug, info, warn};

use platform_client::ApiError;

use crate::mapper;
use crate::session::{SearchState, SessionStore};
use crate::traits::DirectoryApi;
use crate::types::{DiscoverQuery, Provider, SearchOutcome};

/// Search and discovery over the provider directory.
pub struct DiscoveryService<A> {
    api: Arc<A>,
    sessions: SessionStore,
}

impl<A> DiscoveryService<A>
where
    A: DirectoryApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            sessions: SessionStore::new(),
        }
    }

    /// The store holding per-session search continuity state.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Paged service discovery.
    ///
    /// An empty backend result is a normal outcome (no message); a failed
    /// request degrades to an empty outcome with a message.
    pub async fn discover_services(&self, query: &DiscoverQuery) -> SearchOutcome {
        match self.api.discover_services(query).await {
            Ok(page) => {
                let providers = mapper::services_to_providers(page.providers);
                info!(
                    count = providers.len(),
                    total = page.total.unwrap_or(providers.len() as u64),
                    page = page.page.unwrap_or(query.page),
                    "discovery results"
                );
                SearchOutcome {
                    total: page.total.unwrap_or(providers.len() as u64),
                    page: page.page.unwrap_or(query.page),
                    limit: page.limit.unwrap_or(query.limit),
                    providers,
                    message: None,
                }
            }
            Err(e) => {
                warn!(code = %e.code(), "discovery degraded to empty");
                SearchOutcome::degraded(query.page, query.limit, user_message(&e))
            }
        }
    }

    /// Direct name search over users, keeping only service providers.
    /// Degrades to an empty list.
    pub async fn search_users(&self, term: &str) -> Vec<Provider> {
        match self.api.search_users(term).await {
            Ok(users) => mapper::users_to_providers(users),
            Err(e) => {
                warn!(code = %e.code(), term, "user search degraded to empty");
                Vec::new()
            }
        }
    }

    /// The composite search flow: a direct name search first, falling back
    /// to discovery when it turns up nothing.
    pub async fn search_providers(&self, term: &str) -> SearchOutcome {
        let direct = self.search_users(term).await;
        if !direct.is_empty() {
            debug!(term, count = direct.len(), "direct name search matched");
            let query = DiscoverQuery::new().with_query(term);
            return SearchOutcome {
                total: direct.len() as u64,
                page: query.page,
                limit: query.limit,
                providers: direct,
                message: None,
            };
        }

        debug!(term, "direct name search empty, falling back to discovery");
        self.discover_services(&DiscoverQuery::new().with_query(term))
            .await
    }

    /// Composite search that also records the outcome for back/forward
    /// continuity under `session`.
    pub async fn search_with_session(&self, session: &str, term: &str) -> SearchOutcome {
        let outcome = self.search_providers(term).await;
        self.sessions.save(
            session,
            SearchState {
                service_name: term.to_string(),
                results: outcome.providers.clone(),
                error: outcome.message.clone(),
            },
        );
        outcome
    }

    /// Providers near a coordinate. Degrades to an empty list.
    pub async fn nearby_services(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Provider> {
        match self.api.nearby_services(lat, lon, radius_km).await {
            Ok(services) => mapper::services_to_providers(services),
            Err(e) => {
                warn!(code = %e.code(), lat, lon, radius_km, "nearby search degraded to empty");
                Vec::new()
            }
        }
    }
}

/// Human-readable message for a degraded search.
fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Timeout => "The search took too long. Please try again.".to_string(),
        ApiError::NoConnection(_) => {
            "We couldn't reach the service. Check your connection and try again.".to_string()
        }
        ApiError::InvalidFormat(_) => {
            "We received an unexpected response. Please try again later.".to_string()
        }
        _ => "Something went wrong while searching. Please try again later.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_by_kind() {
        assert!(user_message(&ApiError::Timeout).contains("too long"));
        assert!(user_message(&ApiError::NoConnection("dns".into())).contains("connection"));
        assert!(
            user_message(&ApiError::InvalidFormat("bad json".into())).contains("unexpected")
        );
        assert!(user_message(&ApiError::RequestFailed("x".into())).contains("went wrong"));
    }
}
