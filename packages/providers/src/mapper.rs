//! Normalization of backend records into view models.
//!
//! The backend serves two record shapes with overlapping, inconsistently
//! populated fields. Each view-model attribute resolves through a fixed
//! priority chain declared exactly once here, so no caller ever branches on
//! backend shape. All functions are pure; nothing is cached or retained.

use crate::types::raw::{
    RawAnalytics, RawGalleryItem, RawPost, RawReview, RawService, RawUser,
};
use crate::types::{
    GalleryItem, Post, PostKind, PostStatus, Provider, ProviderAnalytics, ProviderStats, Review,
    Reviewer,
};

/// Availability label used when no source declares one.
const DEFAULT_AVAILABILITY: &str = "Unavailable";

/// Auxiliary records merged into the detail view.
#[derive(Debug, Clone, Default)]
pub struct ProviderExtras {
    pub reviews: Vec<RawReview>,
    pub gallery: Vec<RawGalleryItem>,
    pub posts: Vec<RawPost>,
    pub analytics: Option<RawAnalytics>,
}

impl ProviderExtras {
    /// No auxiliary data; used for search results.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Normalize a user record plus its auxiliary fetches into a [`Provider`].
pub fn user_to_provider(user: RawUser, extras: ProviderExtras) -> Provider {
    let profile = user.service_provider.as_ref();
    let (first_name, last_name) = resolve_names(
        user.first_name.as_deref(),
        user.last_name.as_deref(),
        user.name.as_deref(),
    );

    // Rating resolution order: analytics, nested profile, then the flat
    // legacy fields, then 0.
    let rating = normalize_rating(
        extras
            .analytics
            .as_ref()
            .and_then(|a| a.rating)
            .or(profile.and_then(|p| p.average_rating))
            .or(user.service_rating)
            .or(user.average_rating),
    );

    let skills = dedupe_skills(if profile.map(|p| !p.skills.is_empty()).unwrap_or(false) {
        profile.map(|p| p.skills.clone()).unwrap_or_default()
    } else {
        user.skills.clone()
    });

    let stats = resolve_stats(&user, extras.analytics.as_ref());
    let analytics = extras.analytics.as_ref().map(|a| ProviderAnalytics {
        rating: a.rating,
        profile_views: a.profile_views.unwrap_or(0),
        search_appearances: a.search_appearances.unwrap_or(0),
    });

    let reviews = extras
        .reviews
        .into_iter()
        .map(|r| review_to_model(r, &user.id))
        .collect();
    let gallery = extras
        .gallery
        .into_iter()
        .filter_map(gallery_to_model)
        .collect();
    let posts = extras
        .posts
        .into_iter()
        .map(|p| post_to_model(p, &user.id))
        .collect();

    Provider {
        id: user.id,
        first_name,
        last_name,
        service_type: pick_text(&[profile.and_then(|p| p.service_type.as_deref())]),
        headline: pick_text(&[
            profile.and_then(|p| p.headline.as_deref()),
            user.headline.as_deref(),
        ]),
        bio: pick_text(&[
            profile.and_then(|p| p.bio.as_deref()),
            user.bio.as_deref(),
        ]),
        location: pick_text(&[
            profile.and_then(|p| p.location.as_deref()),
            user.location.as_deref(),
        ]),
        service_rating: rating,
        skills,
        availability: pick_label(
            &[
                profile.and_then(|p| p.availability.as_deref()),
                user.availability.as_deref(),
            ],
            DEFAULT_AVAILABILITY,
        ),
        stats,
        reviews,
        gallery,
        posts,
        analytics,
    }
}

/// Normalize a batch of user records, keeping only service providers.
pub fn users_to_providers(users: Vec<RawUser>) -> Vec<Provider> {
    users
        .into_iter()
        .filter(|u| u.is_service_provider)
        .map(|u| user_to_provider(u, ProviderExtras::none()))
        .collect()
}

/// Normalize a batch of service records from discovery or nearby search.
pub fn services_to_providers(services: Vec<RawService>) -> Vec<Provider> {
    services.into_iter().map(service_to_provider).collect()
}

fn service_to_provider(service: RawService) -> Provider {
    let (first_name, last_name) = resolve_names(
        service.first_name.as_deref(),
        service.last_name.as_deref(),
        service.name.as_deref(),
    );
    let rating = normalize_rating(service.average_rating.or(service.rating));

    Provider {
        // The owning user is the provider identity when the record carries
        // it, so detail navigation lands on the profile.
        id: service.user_id.unwrap_or(service.id),
        first_name,
        last_name,
        service_type: pick_text(&[service.service.as_deref()]),
        headline: pick_text(&[service.headline.as_deref()]),
        bio: pick_text(&[service.description.as_deref()]),
        location: pick_text(&[service.location.as_deref()]),
        service_rating: rating,
        skills: dedupe_skills(service.skills),
        availability: pick_label(&[service.availability.as_deref()], DEFAULT_AVAILABILITY),
        stats: ProviderStats::default(),
        reviews: Vec::new(),
        gallery: Vec::new(),
        posts: Vec::new(),
        analytics: None,
    }
}

/// Normalize a review record. `owner_id` supplies the provider identity for
/// records that do not carry one.
pub fn review_to_model(review: RawReview, owner_id: &str) -> Review {
    let reviewer = review.reviewer.map(|r| {
        let (first, last) = resolve_names(
            r.first_name.as_deref(),
            r.last_name.as_deref(),
            r.name.as_deref(),
        );
        Reviewer {
            id: r.id,
            name: join_name(&first, &last),
            avatar_url: r.avatar_url,
        }
    });

    Review {
        id: review.id,
        provider_id: review.user_id.unwrap_or_else(|| owner_id.to_string()),
        rating: normalize_rating(review.rating),
        comment: review.comment.unwrap_or_default(),
        reviewer,
        created_at: review.created_at,
    }
}

/// Normalize a post record.
pub fn post_to_model(post: RawPost, owner_id: &str) -> Post {
    let kind = post
        .post_type
        .as_deref()
        .map(PostKind::parse)
        .unwrap_or_default();

    // Status only means something on service requests; general posts
    // normalize to Open regardless of what the record says.
    let status = match kind {
        PostKind::ServiceRequest => post
            .status
            .as_deref()
            .map(PostStatus::parse)
            .unwrap_or_default(),
        PostKind::General => PostStatus::Open,
    };

    Post {
        id: post.id,
        provider_id: post.user_id.unwrap_or_else(|| owner_id.to_string()),
        caption: post.caption.unwrap_or_default(),
        image_url: post.image_url.filter(|u| !u.is_empty()),
        likes: post.likes_count.unwrap_or(0),
        comments: post.comments_count.unwrap_or(0),
        kind,
        status,
        created_at: post.created_at,
    }
}

/// Normalize a gallery record, dropping entries without an image URL.
pub fn gallery_to_model(item: RawGalleryItem) -> Option<GalleryItem> {
    let image_url = item.image_url.filter(|u| !u.trim().is_empty())?;
    Some(GalleryItem {
        id: item.id,
        image_url,
        caption: item.caption,
    })
}

/// Clamp a resolved rating into `[0, 5]`; absent or non-finite becomes 0.
fn normalize_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() => r.clamp(0.0, 5.0),
        _ => 0.0,
    }
}

/// Explicit first/last fields win; otherwise a composed name is split on the
/// first whitespace.
fn resolve_names(
    first: Option<&str>,
    last: Option<&str>,
    composed: Option<&str>,
) -> (String, String) {
    if first.is_some() || last.is_some() {
        return (
            first.unwrap_or_default().trim().to_string(),
            last.unwrap_or_default().trim().to_string(),
        );
    }
    match composed.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => match name.split_once(char::is_whitespace) {
            Some((head, tail)) => (head.to_string(), tail.trim().to_string()),
            None => (name.to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    }
}

fn join_name(first: &str, last: &str) -> String {
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{} {}", first, last),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (true, true) => String::new(),
    }
}

/// First non-empty candidate, or empty.
fn pick_text(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// First non-empty candidate, or the given default label.
fn pick_label(candidates: &[Option<&str>], default: &str) -> String {
    let picked = pick_text(candidates);
    if picked.is_empty() {
        default.to_string()
    } else {
        picked
    }
}

fn resolve_stats(user: &RawUser, analytics: Option<&RawAnalytics>) -> ProviderStats {
    let nested = user.stats.as_ref();
    let pick = |a: Option<u32>, n: Option<u32>, flat: Option<u32>| a.or(n).or(flat).unwrap_or(0);

    ProviderStats {
        posts: pick(
            analytics.and_then(|a| a.posts),
            nested.and_then(|s| s.posts),
            user.posts_count,
        ),
        followers: pick(
            analytics.and_then(|a| a.followers),
            nested.and_then(|s| s.followers),
            user.followers_count,
        ),
        following: pick(
            analytics.and_then(|a| a.following),
            nested.and_then(|s| s.following),
            user.following_count,
        ),
        referrals: pick(
            analytics.and_then(|a| a.referrals),
            nested.and_then(|s| s.referrals),
            user.referrals_count,
        ),
        bookmarks: pick(
            analytics.and_then(|a| a.bookmarks),
            nested.and_then(|s| s.bookmarks),
            user.bookmarks_count,
        ),
    }
}

fn dedupe_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}
