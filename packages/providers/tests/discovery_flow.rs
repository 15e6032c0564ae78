//! End-to-end flows through the façade and detail service, against the
//! canned mock backend.

use std::sync::Arc;

use platform_client::ApiError;
use providers::testing::MockApi;
use providers::types::raw::{RawAnalytics, RawService, RawUser};
use providers::{DiscoverQuery, DiscoveryService, PostKind, ProvidersService, SearchState};

fn provider_user(id: &str, first: &str, last: &str) -> RawUser {
    serde_json::from_str(&format!(
        r#"{{"id": "{}", "first_name": "{}", "last_name": "{}", "is_service_provider": true}}"#,
        id, first, last
    ))
    .unwrap()
}

fn plumbing_service(id: u32, first: &str) -> RawService {
    serde_json::from_str(&format!(
        r#"{{"id": {}, "firstName": "{}", "average_rating": 4.5, "service": "Plumbing"}}"#,
        id, first
    ))
    .unwrap()
}

#[tokio::test]
async fn discover_empty_backend_resolves_to_empty_outcome() {
    let api = Arc::new(MockApi::new());
    let discovery = DiscoveryService::new(api);

    let outcome = discovery
        .discover_services(&DiscoverQuery::new().with_query("welding"))
        .await;

    assert!(outcome.providers.is_empty());
    assert_eq!(outcome.total, 0);
    assert_eq!(outcome.page, 1);
    assert_eq!(outcome.message, None);
}

#[tokio::test]
async fn discover_failure_degrades_with_message() {
    let api = Arc::new(MockApi::new());
    api.fail("discover_services", ApiError::Timeout);
    let discovery = DiscoveryService::new(api);

    let outcome = discovery
        .discover_services(&DiscoverQuery::new().with_query("plumbing"))
        .await;

    assert!(outcome.providers.is_empty());
    assert_eq!(outcome.total, 0);
    let message = outcome.message.expect("degraded outcome carries a message");
    assert!(message.contains("too long"));
}

#[tokio::test]
async fn search_prefers_direct_name_match() {
    let api = Arc::new(MockApi::new());
    api.add_user(provider_user("1", "Jane", "Doe"));
    api.add_service(plumbing_service(100, "Someone"));
    let discovery = DiscoveryService::new(api.clone());

    let outcome = discovery.search_providers("jane").await;

    assert_eq!(outcome.providers.len(), 1);
    assert_eq!(outcome.providers[0].id, "1");
    // Discovery was never consulted.
    assert_eq!(api.call_count("discover_services"), 0);
}

#[tokio::test]
async fn search_falls_back_to_discovery() {
    let api = Arc::new(MockApi::new());
    api.add_service(plumbing_service(100, "Jane"));
    let discovery = DiscoveryService::new(api.clone());

    let outcome = discovery.search_providers("plumbing").await;

    assert_eq!(outcome.providers.len(), 1);
    assert_eq!(outcome.providers[0].service_type, "Plumbing");
    assert_eq!(outcome.providers[0].service_rating, 4.5);
    assert_eq!(api.call_count("search_users"), 1);
    assert_eq!(api.call_count("discover_services"), 1);
}

#[tokio::test]
async fn search_with_session_records_continuity_state() {
    let api = Arc::new(MockApi::new());
    api.add_service(plumbing_service(100, "Jane"));
    let discovery = DiscoveryService::new(api.clone());

    let outcome = discovery.search_with_session("tab-1", "plumbing").await;
    let restored = discovery.sessions().restore("tab-1").unwrap();

    assert_eq!(restored.service_name, "plumbing");
    assert_eq!(restored.results, outcome.providers);
    assert_eq!(restored.error, None);

    // A degraded search overwrites the state with its message.
    api.fail("search_users", ApiError::NoConnection("offline".into()));
    api.fail("discover_services", ApiError::NoConnection("offline".into()));
    discovery.search_with_session("tab-1", "roofing").await;

    let restored = discovery.sessions().restore("tab-1").unwrap();
    assert_eq!(restored.service_name, "roofing");
    assert!(restored.results.is_empty());
    assert!(restored.error.unwrap().contains("connection"));
}

#[tokio::test]
async fn session_state_round_trips_independently() {
    let api = Arc::new(MockApi::new());
    let discovery = DiscoveryService::new(api);

    discovery.sessions().save(
        "tab-9",
        SearchState {
            service_name: "wiring".into(),
            results: vec![],
            error: None,
        },
    );

    assert_eq!(
        discovery.sessions().restore("tab-9").unwrap().service_name,
        "wiring"
    );
    discovery.sessions().clear("tab-9");
    assert!(discovery.sessions().restore("tab-9").is_none());
}

#[tokio::test]
async fn provider_detail_merges_all_five_reads() {
    let api = Arc::new(MockApi::new());
    api.add_user(provider_user("7", "Sam", "Lee"));
    api.set_reviews(
        "7",
        serde_json::from_str(r#"[{"id": 1, "rating": 5, "comment": "Great"}]"#).unwrap(),
    );
    api.set_gallery(
        "7",
        serde_json::from_str(r#"[{"id": 1, "imageUrl": "https://cdn.example.com/a.jpg"}]"#)
            .unwrap(),
    );
    api.set_posts(
        "7",
        serde_json::from_str(
            r#"[{"id": 1, "caption": "Need a hand", "post_type": "Service Request", "status": "Open"}]"#,
        )
        .unwrap(),
    );
    api.set_analytics(
        "7",
        RawAnalytics {
            rating: Some(4.9),
            ..Default::default()
        },
    );
    let service = ProvidersService::new(api.clone());

    let provider = service.provider_by_id("7").await.unwrap().unwrap();

    assert_eq!(provider.display_name(), "Sam Lee");
    assert_eq!(provider.service_rating, 4.9);
    assert_eq!(provider.reviews.len(), 1);
    assert_eq!(provider.gallery.len(), 1);
    assert_eq!(provider.posts.len(), 1);
    assert_eq!(provider.posts[0].kind, PostKind::ServiceRequest);

    // All five reads happened.
    for endpoint in [
        "fetch_user",
        "user_reviews",
        "user_gallery",
        "user_posts",
        "user_analytics",
    ] {
        assert_eq!(api.call_count(endpoint), 1, "missing call to {}", endpoint);
    }
}

#[tokio::test]
async fn provider_detail_missing_profile_is_none() {
    let api = Arc::new(MockApi::new());
    let service = ProvidersService::new(api);

    assert!(service.provider_by_id("404").await.unwrap().is_none());
}

#[tokio::test]
async fn provider_detail_profile_error_propagates() {
    let api = Arc::new(MockApi::new());
    api.add_user(provider_user("7", "Sam", "Lee"));
    api.fail("fetch_user", ApiError::Timeout);
    let service = ProvidersService::new(api);

    let err = service.provider_by_id("7").await.unwrap_err();
    assert_eq!(err.code(), "TIMEOUT");
}

#[tokio::test]
async fn provider_detail_auxiliary_failures_degrade_to_defaults() {
    let api = Arc::new(MockApi::new());
    api.add_user(provider_user("7", "Sam", "Lee"));
    api.set_reviews(
        "7",
        serde_json::from_str(r#"[{"id": 1, "rating": 5}]"#).unwrap(),
    );
    api.fail("user_reviews", ApiError::Timeout);
    api.fail("user_analytics", ApiError::NoConnection("offline".into()));
    let service = ProvidersService::new(api);

    let provider = service.provider_by_id("7").await.unwrap().unwrap();

    assert_eq!(provider.display_name(), "Sam Lee");
    assert!(provider.reviews.is_empty());
    assert!(provider.analytics.is_none());
    // With analytics down and no other source, rating defaults to 0.
    assert_eq!(provider.service_rating, 0.0);
}

#[tokio::test]
async fn nearby_failure_degrades_to_empty() {
    let api = Arc::new(MockApi::new());
    api.add_nearby(plumbing_service(1, "Near"));
    api.fail("nearby_services", ApiError::RequestFailed("boom".into()));
    let discovery = DiscoveryService::new(api.clone());

    assert!(discovery.nearby_services(44.98, -93.27, 10.0).await.is_empty());

    api.recover("nearby_services");
    assert_eq!(
        discovery.nearby_services(44.98, -93.27, 10.0).await.len(),
        1
    );
}
