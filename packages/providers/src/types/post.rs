//! Post view model and its discriminators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post variant controlling which layout and actions apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    #[default]
    General,
    #[serde(rename = "Service Request")]
    ServiceRequest,
}

impl PostKind {
    /// Parse the wire discriminator. Anything that is not recognizably a
    /// service request is a general post.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        if normalized == "servicerequest" {
            PostKind::ServiceRequest
        } else {
            PostKind::General
        }
    }
}

/// Open/closed state, meaningful only for service-request posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    Open,
    Closed,
}

impl PostStatus {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("closed") {
            PostStatus::Closed
        } else {
            PostStatus::Open
        }
    }
}

/// A post belonging to a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub provider_id: String,
    pub caption: String,
    pub image_url: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub kind: PostKind,
    pub status: PostStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// True for posts that carry the accept/refer actions.
    pub fn is_service_request(&self) -> bool {
        self.kind == PostKind::ServiceRequest
    }

    /// True when this service request still accepts responses.
    pub fn is_open(&self) -> bool {
        self.status == PostStatus::Open
    }
}
