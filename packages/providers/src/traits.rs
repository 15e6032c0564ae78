//! Ports to the platform backend.
//!
//! The domain services depend on these narrow traits rather than the HTTP
//! client, so tests (and any future transport) can swap implementations.
//! [`crate::api::HttpApi`] is the production implementation;
//! [`crate::testing::MockApi`] the canned one.

use async_trait::async_trait;

use platform_client::Result;

use crate::account::{AuthSession, NewAccount, Notification};
use crate::types::raw::{
    RawAnalytics, RawDiscoverPage, RawGalleryItem, RawPost, RawReview, RawService, RawUser,
};
use crate::types::DiscoverQuery;

/// Read access to the user directory and discovery search.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch a user profile. `Ok(None)` when the backend has no such user.
    async fn fetch_user(&self, id: &str) -> Result<Option<RawUser>>;

    /// Direct name search over users.
    async fn search_users(&self, term: &str) -> Result<Vec<RawUser>>;

    /// Paged service discovery. Ordering is the backend's business.
    async fn discover_services(&self, query: &DiscoverQuery) -> Result<RawDiscoverPage>;

    /// Services near a coordinate, within `radius_km`.
    async fn nearby_services(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<Vec<RawService>>;

    /// Analytics aggregate for a user. `Ok(None)` when none is recorded.
    async fn user_analytics(&self, id: &str) -> Result<Option<RawAnalytics>>;
}

/// Reviews, gallery, and posts attached to a provider profile.
#[async_trait]
pub trait EngagementApi: Send + Sync {
    async fn user_reviews(&self, id: &str) -> Result<Vec<RawReview>>;

    async fn user_gallery(&self, id: &str) -> Result<Vec<RawGalleryItem>>;

    async fn user_posts(&self, id: &str) -> Result<Vec<RawPost>>;

    /// Like a post; returns the updated record.
    async fn like_post(&self, post_id: &str) -> Result<RawPost>;

    /// Accept an open service request.
    async fn accept_service_request(&self, post_id: &str) -> Result<RawPost>;

    /// Refer another user to an open service request.
    async fn refer_service_request(&self, post_id: &str, user_id: &str) -> Result<RawPost>;

    /// Close a service request.
    async fn close_service_request(&self, post_id: &str) -> Result<RawPost>;
}

/// Signup/login handoff and notifications.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    async fn register(&self, account: &NewAccount) -> Result<AuthSession>;

    async fn notifications(&self) -> Result<Vec<Notification>>;

    async fn dismiss_notification(&self, id: &str) -> Result<()>;
}
