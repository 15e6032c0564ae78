//! The normalized provider view model.

use serde::{Deserialize, Serialize};

use super::{GalleryItem, Post, Review};

/// A person or business offering services, merged from one or more backend
/// shapes into a single normalized record.
///
/// Constructed fresh on every search or detail fetch; the mapper guarantees
/// `service_rating` is finite and within `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub service_type: String,
    pub headline: String,
    pub bio: String,
    pub location: String,
    pub service_rating: f64,
    pub skills: Vec<String>,
    pub availability: String,
    pub stats: ProviderStats,
    /// Detail-view extras; empty on search results.
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub analytics: Option<ProviderAnalytics>,
}

impl Provider {
    /// Display name composed from the name parts, skipping empty ones.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Aggregate counters shown on a provider profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
    pub referrals: u32,
    pub bookmarks: u32,
}

/// Analytics summary merged into the detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderAnalytics {
    pub rating: Option<f64>,
    pub profile_views: u64,
    pub search_appearances: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_provider() -> Provider {
        Provider {
            id: "1".into(),
            first_name: String::new(),
            last_name: String::new(),
            service_type: String::new(),
            headline: String::new(),
            bio: String::new(),
            location: String::new(),
            service_rating: 0.0,
            skills: vec![],
            availability: String::new(),
            stats: ProviderStats::default(),
            reviews: vec![],
            gallery: vec![],
            posts: vec![],
            analytics: None,
        }
    }

    #[test]
    fn test_display_name_skips_empty_parts() {
        let mut provider = bare_provider();
        assert_eq!(provider.display_name(), "");

        provider.first_name = "Jane".into();
        assert_eq!(provider.display_name(), "Jane");

        provider.last_name = "Doe".into();
        assert_eq!(provider.display_name(), "Jane Doe");
    }
}
