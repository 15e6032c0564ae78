//! Provider discovery and normalization library.
//!
//! Everything the provider-discovery product needs from the platform
//! backend, behind a small set of explicitly constructed services. The
//! backend serves two historical record shapes with inconsistent optional
//! fields; this crate declares those shapes once, normalizes them into a
//! single [`Provider`] view model, and wraps search in a façade that never
//! surfaces an error — failures degrade to empty results with a
//! human-readable message.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use platform_client::PlatformClient;
//! use providers::{DiscoveryService, HttpApi, ProvidersService};
//!
//! let api = Arc::new(HttpApi::new(PlatformClient::from_env()?));
//!
//! let discovery = DiscoveryService::new(api.clone());
//! let outcome = discovery.search_providers("plumbing").await;
//! for provider in &outcome.providers {
//!     println!("{} — {}", provider.display_name(), provider.service_type);
//! }
//!
//! let service = ProvidersService::new(api);
//! if let Some(profile) = service.provider_by_id("42").await? {
//!     println!("{} reviews", profile.reviews.len());
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire schemas and normalized view models
//! - [`mapper`] - Shape normalization with the field fallback chains
//! - [`traits`] - Backend ports ([`DirectoryApi`], [`EngagementApi`], [`AccountApi`])
//! - [`api`] - HTTP implementation of the ports
//! - [`discovery`] - The search façade (degrades, never throws)
//! - [`service`] - Provider detail assembly (five concurrent reads)
//! - [`session`] - Per-session search continuity
//! - [`posts`] / [`account`] - Post actions and the signup/login handoff
//! - [`testing`] - Canned mock backend with call tracking

pub mod account;
pub mod api;
pub mod discovery;
pub mod mapper;
pub mod posts;
pub mod service;
pub mod session;
pub mod testing;
pub mod traits;
pub mod types;

pub use account::{AccountService, AuthSession, NewAccount, Notification};
pub use api::HttpApi;
pub use discovery::DiscoveryService;
pub use mapper::{services_to_providers, user_to_provider, users_to_providers, ProviderExtras};
pub use posts::PostsService;
pub use service::ProvidersService;
pub use session::{SearchState, SessionStore};
pub use traits::{AccountApi, DirectoryApi, EngagementApi};
pub use types::{
    DiscoverQuery, GalleryItem, Post, PostKind, PostStatus, Provider, ProviderAnalytics,
    ProviderStats, Review, Reviewer, SearchOutcome,
};

// Re-export the transport error surface so callers need only this crate.
pub use platform_client::{ApiError, PlatformClient, Result};
