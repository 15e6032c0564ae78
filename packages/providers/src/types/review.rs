//! Review view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review left on a provider profile. Rating is normalized into `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub provider_id: String,
    pub rating: f64,
    pub comment: String,
    pub reviewer: Option<Reviewer>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Embedded reviewer identity, when the backend included one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}
