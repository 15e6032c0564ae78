//! Backend wire shapes.
//!
//! The platform backend serves two historical record shapes — a "user" shape
//! and a "service" shape — with inconsistent optional fields and mixed
//! snake/camel spellings. All of that variance is declared once here:
//! `#[serde(alias)]` absorbs the spellings, `#[serde(default)]` the missing
//! fields, and the lenient deserializers the ids/ratings that arrive as
//! either JSON numbers or numeric strings. Nothing outside this module
//! branches on backend shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a number-or-string rating field. Non-numeric values are treated
/// as absent rather than failing the whole record.
fn de_rating<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Coerce a number-or-string id into a string.
fn de_id<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(de_opt_id(de)?.unwrap_or_default())
}

/// Coerce an optional number-or-string id.
fn de_opt_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// The "user" record shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    /// Composed display name, present on some records instead of first/last.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "isServiceProvider")]
    pub is_service_provider: bool,
    /// Nested service-provider profile, the preferred source for
    /// service fields when present.
    #[serde(default, alias = "serviceProvider")]
    pub service_provider: Option<RawServiceProfile>,
    #[serde(default, alias = "serviceRating", deserialize_with = "de_rating")]
    pub service_rating: Option<f64>,
    #[serde(default, alias = "averageRating", deserialize_with = "de_rating")]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub stats: Option<RawStats>,
    #[serde(default, alias = "postsCount")]
    pub posts_count: Option<u32>,
    #[serde(default, alias = "followersCount")]
    pub followers_count: Option<u32>,
    #[serde(default, alias = "followingCount")]
    pub following_count: Option<u32>,
    #[serde(default, alias = "referralsCount")]
    pub referrals_count: Option<u32>,
    #[serde(default, alias = "bookmarksCount")]
    pub bookmarks_count: Option<u32>,
}

/// Nested service-provider profile on the user shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawServiceProfile {
    #[serde(default, alias = "serviceType", alias = "service")]
    pub service_type: Option<String>,
    #[serde(default, alias = "averageRating", deserialize_with = "de_rating")]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Aggregate counters nested under `stats` on some user records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(default, alias = "postsCount")]
    pub posts: Option<u32>,
    #[serde(default, alias = "followersCount")]
    pub followers: Option<u32>,
    #[serde(default, alias = "followingCount")]
    pub following: Option<u32>,
    #[serde(default, alias = "referralsCount")]
    pub referrals: Option<u32>,
    #[serde(default, alias = "bookmarksCount")]
    pub bookmarks: Option<u32>,
}

/// The "service" record shape returned by discovery and nearby search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawService {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Owning user, when the record carries it. Preferred over `id` as the
    /// provider identity so detail navigation lands on the profile.
    #[serde(default, alias = "userId", deserialize_with = "de_opt_id")]
    pub user_id: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "averageRating", deserialize_with = "de_rating")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "de_rating")]
    pub rating: Option<f64>,
    #[serde(default, alias = "serviceType", alias = "service_type")]
    pub service: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A review record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(
        default,
        alias = "userId",
        alias = "provider_id",
        deserialize_with = "de_opt_id"
    )]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "de_rating")]
    pub rating: Option<f64>,
    #[serde(default, alias = "text", alias = "body")]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer: Option<RawReviewer>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Embedded reviewer identity on a review record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReviewer {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "avatarUrl", alias = "avatar")]
    pub avatar_url: Option<String>,
}

/// A gallery record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGalleryItem {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, alias = "imageUrl", alias = "url")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A post record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(
        default,
        alias = "userId",
        alias = "provider_id",
        deserialize_with = "de_opt_id"
    )]
    pub user_id: Option<String>,
    #[serde(default, alias = "content", alias = "text")]
    pub caption: Option<String>,
    #[serde(default, alias = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
    #[serde(default, alias = "likesCount", alias = "likes")]
    pub likes_count: Option<u32>,
    #[serde(default, alias = "commentsCount", alias = "comments")]
    pub comments_count: Option<u32>,
    /// `"General"` or `"Service Request"` on the wire.
    #[serde(default, alias = "postType", alias = "type")]
    pub post_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Analytics aggregate for a provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnalytics {
    #[serde(default, deserialize_with = "de_rating")]
    pub rating: Option<f64>,
    #[serde(default, alias = "profileViews")]
    pub profile_views: Option<u64>,
    #[serde(default, alias = "searchAppearances")]
    pub search_appearances: Option<u64>,
    #[serde(default, alias = "postsCount")]
    pub posts: Option<u32>,
    #[serde(default, alias = "followersCount")]
    pub followers: Option<u32>,
    #[serde(default, alias = "followingCount")]
    pub following: Option<u32>,
    #[serde(default, alias = "referralsCount")]
    pub referrals: Option<u32>,
    #[serde(default, alias = "bookmarksCount")]
    pub bookmarks: Option<u32>,
}

/// Paged discovery response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDiscoverPage {
    #[serde(default, alias = "services", alias = "data")]
    pub providers: Vec<RawService>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_both_spellings() {
        let camel: RawUser = serde_json::from_str(
            r#"{"id": 7, "firstName": "Ada", "lastName": "Lovelace", "isServiceProvider": true}"#,
        )
        .unwrap();
        let snake: RawUser = serde_json::from_str(
            r#"{"id": "7", "first_name": "Ada", "last_name": "Lovelace", "is_service_provider": true}"#,
        )
        .unwrap();

        assert_eq!(camel.id, "7");
        assert_eq!(snake.id, "7");
        assert_eq!(camel.first_name.as_deref(), Some("Ada"));
        assert_eq!(snake.first_name.as_deref(), Some("Ada"));
        assert!(camel.is_service_provider && snake.is_service_provider);
    }

    #[test]
    fn test_rating_coerces_numeric_string() {
        let user: RawUser =
            serde_json::from_str(r#"{"id": 1, "service_rating": "4.2"}"#).unwrap();
        assert_eq!(user.service_rating, Some(4.2));

        let user: RawUser = serde_json::from_str(r#"{"id": 1, "service_rating": 3}"#).unwrap();
        assert_eq!(user.service_rating, Some(3.0));
    }

    #[test]
    fn test_rating_garbage_is_absent() {
        let user: RawUser =
            serde_json::from_str(r#"{"id": 1, "service_rating": "five stars"}"#).unwrap();
        assert_eq!(user.service_rating, None);

        let user: RawUser =
            serde_json::from_str(r#"{"id": 1, "service_rating": null}"#).unwrap();
        assert_eq!(user.service_rating, None);
    }

    #[test]
    fn test_service_shape_example() {
        let service: RawService = serde_json::from_str(
            r#"{"firstName": "Jane", "lastName": "Doe", "average_rating": 4.5, "service": "Plumbing"}"#,
        )
        .unwrap();

        assert_eq!(service.first_name.as_deref(), Some("Jane"));
        assert_eq!(service.last_name.as_deref(), Some("Doe"));
        assert_eq!(service.average_rating, Some(4.5));
        assert_eq!(service.service.as_deref(), Some("Plumbing"));
    }

    #[test]
    fn test_discover_page_accepts_alternate_list_keys() {
        let page: RawDiscoverPage =
            serde_json::from_str(r#"{"services": [{"id": 1}], "total": 1}"#).unwrap();
        assert_eq!(page.providers.len(), 1);

        let page: RawDiscoverPage =
            serde_json::from_str(r#"{"data": [{"id": 1}, {"id": 2}]}"#).unwrap();
        assert_eq!(page.providers.len(), 2);
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_empty_objects_deserialize() {
        let user: RawUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user.id, "");
        assert!(!user.is_service_provider);

        let post: RawPost = serde_json::from_str("{}").unwrap();
        assert_eq!(post.post_type, None);
    }
}
