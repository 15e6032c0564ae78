//! Mock backend for testing.
//!
//! Canned-response implementation of the backend ports, with per-endpoint
//! failure injection and call tracking.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use platform_client::{ApiError, Result};

use crate::account::{AuthSession, NewAccount, Notification};
use crate::traits::{AccountApi, DirectoryApi, EngagementApi};
use crate::types::raw::{
    RawAnalytics, RawDiscoverPage, RawGalleryItem, RawPost, RawReview, RawService, RawUser,
};
use crate::types::DiscoverQuery;

/// Mock backend for testing.
///
/// Configure canned records, inject failures per endpoint, and verify which
/// calls were made.
///
/// # Example
///
/// ```rust,ignore
/// use providers::testing::MockApi;
///
/// let api = MockApi::new();
/// api.add_user(user);
/// api.fail("user_reviews", ApiError::Timeout);
/// ```
#[derive(Default)]
pub struct MockApi {
    users: Arc<RwLock<Vec<RawUser>>>,
    services: Arc<RwLock<Vec<RawService>>>,
    nearby: Arc<RwLock<Vec<RawService>>>,
    reviews: Arc<RwLock<HashMap<String, Vec<RawReview>>>>,
    gallery: Arc<RwLock<HashMap<String, Vec<RawGalleryItem>>>>,
    posts: Arc<RwLock<HashMap<String, Vec<RawPost>>>>,
    analytics: Arc<RwLock<HashMap<String, RawAnalytics>>>,
    notifications: Arc<RwLock<Vec<Notification>>>,
    failures: Arc<RwLock<HashMap<String, ApiError>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user record (also served by name search).
    pub fn add_user(&self, user: RawUser) {
        self.users.write().unwrap().push(user);
    }

    /// Add a service record served by discovery.
    pub fn add_service(&self, service: RawService) {
        self.services.write().unwrap().push(service);
    }

    /// Add a service record served by nearby search.
    pub fn add_nearby(&self, service: RawService) {
        self.nearby.write().unwrap().push(service);
    }

    pub fn set_reviews(&self, user_id: &str, reviews: Vec<RawReview>) {
        self.reviews
            .write()
            .unwrap()
            .insert(user_id.to_string(), reviews);
    }

    pub fn set_gallery(&self, user_id: &str, gallery: Vec<RawGalleryItem>) {
        self.gallery
            .write()
            .unwrap()
            .insert(user_id.to_string(), gallery);
    }

    pub fn set_posts(&self, user_id: &str, posts: Vec<RawPost>) {
        self.posts
            .write()
            .unwrap()
            .insert(user_id.to_string(), posts);
    }

    pub fn set_analytics(&self, user_id: &str, analytics: RawAnalytics) {
        self.analytics
            .write()
            .unwrap()
            .insert(user_id.to_string(), analytics);
    }

    pub fn add_notification(&self, notification: Notification) {
        self.notifications.write().unwrap().push(notification);
    }

    /// Make the named endpoint fail with `err` until cleared.
    ///
    /// Endpoint names match the trait method names (`"fetch_user"`,
    /// `"discover_services"`, ...).
    pub fn fail(&self, endpoint: &str, err: ApiError) {
        self.failures
            .write()
            .unwrap()
            .insert(endpoint.to_string(), err);
    }

    /// Stop failing the named endpoint.
    pub fn recover(&self, endpoint: &str) {
        self.failures.write().unwrap().remove(endpoint);
    }

    /// Every call made so far, as `"method:arg"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls to the named endpoint.
    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.split(':').next() == Some(endpoint))
            .count()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, endpoint: &str, arg: &str) -> Result<()> {
        self.calls
            .write()
            .unwrap()
            .push(format!("{}:{}", endpoint, arg));
        match self.failures.read().unwrap().get(endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Clone for MockApi {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            services: Arc::clone(&self.services),
            nearby: Arc::clone(&self.nearby),
            reviews: Arc::clone(&self.reviews),
            gallery: Arc::clone(&self.gallery),
            posts: Arc::clone(&self.posts),
            analytics: Arc::clone(&self.analytics),
            notifications: Arc::clone(&self.notifications),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl DirectoryApi for MockApi {
    async fn fetch_user(&self, id: &str) -> Result<Option<RawUser>> {
        self.record("fetch_user", id)?;
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn search_users(&self, term: &str) -> Result<Vec<RawUser>> {
        self.record("search_users", term)?;
        let needle = term.to_lowercase();
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .filter(|u| {
                [&u.first_name, &u.last_name, &u.name]
                    .into_iter()
                    .flatten()
                    .any(|part| part.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn discover_services(&self, query: &DiscoverQuery) -> Result<RawDiscoverPage> {
        self.record(
            "discover_services",
            query.query.as_deref().unwrap_or_default(),
        )?;
        let services = self.services.read().unwrap();
        let matching: Vec<RawService> = services
            .iter()
            .filter(|s| match &query.query {
                Some(term) => {
                    let needle = term.to_lowercase();
                    s.service
                        .as_deref()
                        .map(|v| v.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                        || [&s.first_name, &s.last_name, &s.name]
                            .into_iter()
                            .flatten()
                            .any(|part| part.to_lowercase().contains(&needle))
                }
                None => true,
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let start = (query.page.saturating_sub(1) as usize) * query.limit as usize;
        let providers = matching
            .into_iter()
            .skip(start)
            .take(query.limit as usize)
            .collect();

        Ok(RawDiscoverPage {
            providers,
            total: Some(total),
            page: Some(query.page),
            limit: Some(query.limit),
        })
    }

    async fn nearby_services(
        &self,
        lat: f64,
        lon: f64,
        _radius_km: f64,
    ) -> Result<Vec<RawService>> {
        self.record("nearby_services", &format!("{},{}", lat, lon))?;
        Ok(self.nearby.read().unwrap().clone())
    }

    async fn user_analytics(&self, id: &str) -> Result<Option<RawAnalytics>> {
        self.record("user_analytics", id)?;
        Ok(self.analytics.read().unwrap().get(id).cloned())
    }
}

#[async_trait]
impl EngagementApi for MockApi {
    async fn user_reviews(&self, id: &str) -> Result<Vec<RawReview>> {
        self.record("user_reviews", id)?;
        Ok(self
            .reviews
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn user_gallery(&self, id: &str) -> Result<Vec<RawGalleryItem>> {
        self.record("user_gallery", id)?;
        Ok(self
            .gallery
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn user_posts(&self, id: &str) -> Result<Vec<RawPost>> {
        self.record("user_posts", id)?;
        Ok(self
            .posts
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn like_post(&self, post_id: &str) -> Result<RawPost> {
        self.record("like_post", post_id)?;
        self.update_post(post_id, |p| {
            p.likes_count = Some(p.likes_count.unwrap_or(0) + 1)
        })
    }

    async fn accept_service_request(&self, post_id: &str) -> Result<RawPost> {
        self.record("accept_service_request", post_id)?;
        self.update_post(post_id, |p| p.status = Some("Closed".into()))
    }

    async fn refer_service_request(&self, post_id: &str, user_id: &str) -> Result<RawPost> {
        self.record(
            "refer_service_request",
            &format!("{}:{}", post_id, user_id),
        )?;
        self.update_post(post_id, |_| {})
    }

    async fn close_service_request(&self, post_id: &str) -> Result<RawPost> {
        self.record("close_service_request", post_id)?;
        self.update_post(post_id, |p| p.status = Some("Closed".into()))
    }
}

impl MockApi {
    fn update_post(
        &self,
        post_id: &str,
        mut mutate: impl FnMut(&mut RawPost),
    ) -> Result<RawPost> {
        let mut posts = self.posts.write().unwrap();
        for list in posts.values_mut() {
            if let Some(post) = list.iter_mut().find(|p| p.id == post_id) {
                mutate(post);
                return Ok(post.clone());
            }
        }
        Err(ApiError::from_response(404, ""))
    }
}

#[async_trait]
impl AccountApi for MockApi {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthSession> {
        self.record("login", email)?;
        Ok(AuthSession {
            token: "mock-token".to_string(),
            redirect_url: "https://app.providerhub.io/home".to_string(),
        })
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthSession> {
        self.record("register", &account.email)?;
        Ok(AuthSession {
            token: "mock-token".to_string(),
            redirect_url: "https://app.providerhub.io/welcome".to_string(),
        })
    }

    async fn notifications(&self) -> Result<Vec<Notification>> {
        self.record("notifications", "")?;
        Ok(self.notifications.read().unwrap().clone())
    }

    async fn dismiss_notification(&self, id: &str) -> Result<()> {
        self.record("dismiss_notification", id)?;
        self.notifications.write().unwrap().retain(|n| n.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_user(id: &str, first: &str, last: &str) -> RawUser {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "first_name": "{}", "last_name": "{}", "is_service_provider": true}}"#,
            id, first, last
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_matches_any_name_part() {
        let api = MockApi::new();
        api.add_user(named_user("1", "Jane", "Doe"));
        api.add_user(named_user("2", "John", "Smith"));

        let hits = api.search_users("doe").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[tokio::test]
    async fn test_failure_injection_and_recovery() {
        let api = MockApi::new();
        api.fail("fetch_user", ApiError::Timeout);

        let err = api.fetch_user("1").await.unwrap_err();
        assert_eq!(err.code(), "TIMEOUT");

        api.recover("fetch_user");
        assert!(api.fetch_user("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_call_tracking() {
        let api = MockApi::new();
        api.fetch_user("7").await.unwrap();
        api.user_reviews("7").await.unwrap();
        api.user_reviews("8").await.unwrap();

        assert_eq!(api.call_count("user_reviews"), 2);
        assert_eq!(api.calls()[0], "fetch_user:7");
    }

    #[tokio::test]
    async fn test_discover_paging() {
        let api = MockApi::new();
        for i in 0..25 {
            api.add_service(
                serde_json::from_str(&format!(r#"{{"id": {}, "service": "Plumbing"}}"#, i))
                    .unwrap(),
            );
        }

        let query = DiscoverQuery::new().with_query("plumbing").with_page(2);
        let page = api.discover_services(&query).await.unwrap();

        assert_eq!(page.total, Some(25));
        assert_eq!(page.providers.len(), 5);
        assert_eq!(page.page, Some(2));
    }
}
