//! Post actions.
//!
//! Likes apply to any post; accept/refer/close only make sense for
//! service requests. These propagate [`platform_client::ApiError`] — the
//! degrade-to-empty policy belongs to the discovery façade alone.

use std::sync::Arc;

use tracing::info;

use platform_client::Result;

use crate::mapper;
use crate::traits::EngagementApi;
use crate::types::Post;

/// Actions on provider posts.
pub struct PostsService<A> {
    api: Arc<A>,
}

impl<A> PostsService<A>
where
    A: EngagementApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Posts on a provider profile.
    pub async fn posts_for(&self, provider_id: &str) -> Result<Vec<Post>> {
        let raw = self.api.user_posts(provider_id).await?;
        Ok(raw
            .into_iter()
            .map(|p| mapper::post_to_model(p, provider_id))
            .collect())
    }

    /// Like a post; returns the updated post.
    pub async fn like(&self, post_id: &str) -> Result<Post> {
        let raw = self.api.like_post(post_id).await?;
        Ok(mapper::post_to_model(raw, ""))
    }

    /// Accept an open service request.
    pub async fn accept_service_request(&self, post_id: &str) -> Result<Post> {
        let raw = self.api.accept_service_request(post_id).await?;
        info!(post_id, "service request accepted");
        Ok(mapper::post_to_model(raw, ""))
    }

    /// Refer another user to an open service request.
    pub async fn refer_service_request(&self, post_id: &str, user_id: &str) -> Result<Post> {
        let raw = self.api.refer_service_request(post_id, user_id).await?;
        info!(post_id, referred = user_id, "service request referral sent");
        Ok(mapper::post_to_model(raw, ""))
    }

    /// Close a service request.
    pub async fn close_service_request(&self, post_id: &str) -> Result<Post> {
        let raw = self.api.close_service_request(post_id).await?;
        info!(post_id, "service request closed");
        Ok(mapper::post_to_model(raw, ""))
    }
}
