//! Signup/login handoff and notifications.
//!
//! Authentication on the marketing site is a handoff: a successful login or
//! registration yields a token and the URL of the application the user is
//! redirected into.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use platform_client::Result;

use crate::traits::AccountApi;

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    #[serde(alias = "access_token")]
    pub token: String,
    /// Where to send the user next.
    #[serde(alias = "redirectUrl", alias = "app_url")]
    pub redirect_url: String,
}

/// Payload for account registration.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// A notification for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "subject")]
    pub title: String,
    #[serde(default, alias = "body")]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Account operations.
pub struct AccountService<A> {
    api: Arc<A>,
}

impl<A> AccountService<A>
where
    A: AccountApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Log in and receive the application handoff.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let session = self.api.login(email, password).await?;
        info!(email, "login handoff issued");
        Ok(session)
    }

    /// Register a new account and receive the application handoff.
    pub async fn register(&self, account: &NewAccount) -> Result<AuthSession> {
        let session = self.api.register(account).await?;
        info!(email = %account.email, "registration handoff issued");
        Ok(session)
    }

    /// Notifications for the signed-in user.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        self.api.notifications().await
    }

    /// Dismiss a notification.
    pub async fn dismiss_notification(&self, id: &str) -> Result<()> {
        self.api.dismiss_notification(id).await
    }
}
