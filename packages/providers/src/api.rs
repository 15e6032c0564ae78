//! HTTP implementation of the backend ports.
//!
//! Owns every endpoint path and query string; nothing else in the crate
//! knows what the backend's URLs look like.

use async_trait::async_trait;
use serde_json::json;

use platform_client::{PlatformClient, Result};

use crate::account::{AuthSession, NewAccount, Notification};
use crate::traits::{AccountApi, DirectoryApi, EngagementApi};
use crate::types::raw::{
    RawAnalytics, RawDiscoverPage, RawGalleryItem, RawPost, RawReview, RawService, RawUser,
};
use crate::types::DiscoverQuery;

/// Production implementation of the backend ports over [`PlatformClient`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: PlatformClient,
}

impl HttpApi {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PlatformClient {
        &self.client
    }
}

#[async_trait]
impl DirectoryApi for HttpApi {
    async fn fetch_user(&self, id: &str) -> Result<Option<RawUser>> {
        match self.client.get::<RawUser>(&format!("/users/{}", id)).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn search_users(&self, term: &str) -> Result<Vec<RawUser>> {
        self.client
            .get_query("/users/search", &[("query", term.to_string())])
            .await
    }

    async fn discover_services(&self, query: &DiscoverQuery) -> Result<RawDiscoverPage> {
        self.client
            .get_query("/services/discover", &query.to_query_pairs())
            .await
    }

    async fn nearby_services(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<Vec<RawService>> {
        self.client
            .get_query(
                "/services/nearby",
                &[
                    ("lat", lat.to_string()),
                    ("lng", lon.to_string()),
                    ("radius_km", radius_km.to_string()),
                ],
            )
            .await
    }

    async fn user_analytics(&self, id: &str) -> Result<Option<RawAnalytics>> {
        match self
            .client
            .get::<RawAnalytics>(&format!("/users/{}/analytics", id))
            .await
        {
            Ok(analytics) => Ok(Some(analytics)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl EngagementApi for HttpApi {
    async fn user_reviews(&self, id: &str) -> Result<Vec<RawReview>> {
        self.client.get(&format!("/users/{}/reviews", id)).await
    }

    async fn user_gallery(&self, id: &str) -> Result<Vec<RawGalleryItem>> {
        self.client.get(&format!("/users/{}/gallery", id)).await
    }

    async fn user_posts(&self, id: &str) -> Result<Vec<RawPost>> {
        self.client.get(&format!("/users/{}/posts", id)).await
    }

    async fn like_post(&self, post_id: &str) -> Result<RawPost> {
        self.client
            .post(&format!("/posts/{}/like", post_id), &json!({}))
            .await
    }

    async fn accept_service_request(&self, post_id: &str) -> Result<RawPost> {
        self.client
            .post(&format!("/posts/{}/accept", post_id), &json!({}))
            .await
    }

    async fn refer_service_request(&self, post_id: &str, user_id: &str) -> Result<RawPost> {
        self.client
            .post(
                &format!("/posts/{}/refer", post_id),
                &json!({ "user_id": user_id }),
            )
            .await
    }

    async fn close_service_request(&self, post_id: &str) -> Result<RawPost> {
        self.client
            .patch(
                &format!("/posts/{}", post_id),
                &json!({ "status": "Closed" }),
            )
            .await
    }
}

#[async_trait]
impl AccountApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        self.client
            .post(
                "/auth/login",
                &json!({ "email": email, "password": password }),
            )
            .await
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthSession> {
        self.client.post("/auth/register", account).await
    }

    async fn notifications(&self) -> Result<Vec<Notification>> {
        self.client.get("/notifications").await
    }

    async fn dismiss_notification(&self, id: &str) -> Result<()> {
        self.client
            .delete::<serde_json::Value>(&format!("/notifications/{}", id))
            .await
            .map(|_| ())
    }
}
