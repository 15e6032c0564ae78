//! Provider detail view.

use std::sync::Arc;

use tracing::{debug, warn};

use platform_client::Result;

use crate::mapper::{self, ProviderExtras};
use crate::traits::{DirectoryApi, EngagementApi};
use crate::types::Provider;

/// Assembles the provider detail view from the directory and engagement
/// endpoints.
pub struct ProvidersService<A> {
    api: Arc<A>,
}

impl<A> ProvidersService<A>
where
    A: DirectoryApi + EngagementApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch a provider profile with its reviews, gallery, posts, and
    /// analytics merged in.
    ///
    /// The five reads run concurrently; none depends on another. Only the
    /// primary profile read decides the outcome: a missing profile resolves
    /// to `Ok(None)` and a failed one propagates its error — a partial
    /// profile is never returned. Auxiliary reads that fail degrade to
    /// empty defaults.
    pub async fn provider_by_id(&self, id: &str) -> Result<Option<Provider>> {
        debug!(provider_id = id, "fetching provider detail");

        let (profile, reviews, gallery, posts, analytics) = tokio::join!(
            self.api.fetch_user(id),
            self.api.user_reviews(id),
            self.api.user_gallery(id),
            self.api.user_posts(id),
            self.api.user_analytics(id),
        );

        let user = match profile? {
            Some(user) => user,
            None => {
                debug!(provider_id = id, "provider not found");
                return Ok(None);
            }
        };

        let reviews = reviews.unwrap_or_else(|e| {
            warn!(provider_id = id, code = %e.code(), "reviews fetch degraded to empty");
            Vec::new()
        });
        let gallery = gallery.unwrap_or_else(|e| {
            warn!(provider_id = id, code = %e.code(), "gallery fetch degraded to empty");
            Vec::new()
        });
        let posts = posts.unwrap_or_else(|e| {
            warn!(provider_id = id, code = %e.code(), "posts fetch degraded to empty");
            Vec::new()
        });
        let analytics = analytics.unwrap_or_else(|e| {
            warn!(provider_id = id, code = %e.code(), "analytics fetch degraded to none");
            None
        });

        let provider = mapper::user_to_provider(
            user,
            ProviderExtras {
                reviews,
                gallery,
                posts,
                analytics,
            },
        );

        debug!(
            provider_id = %provider.id,
            reviews = provider.reviews.len(),
            posts = provider.posts.len(),
            "provider detail assembled"
        );
        Ok(Some(provider))
    }
}
