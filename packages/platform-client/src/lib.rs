//! Pure ProviderHub platform REST API client.
//!
//! A minimal client for the platform backend. Owns the HTTP plumbing every
//! higher layer relies on: verb helpers that deserialize 2xx JSON bodies,
//! a fixed request timeout that aborts in-flight requests on expiry, and
//! translation of every failure into the closed [`ApiError`] taxonomy.
//! No retries: each call is attempted exactly once.
//!
//! # Example
//!
//! ```rust,ignore
//! use platform_client::PlatformClient;
//!
//! let client = PlatformClient::from_env()?;
//!
//! let user: serde_json::Value = client.get("/users/42").await?;
//! println!("{user}");
//! ```

pub mod error;

pub use error::{ApiError, Result};

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API base URL.
const BASE_URL_ENV: &str = "PLATFORM_API_URL";

/// Platform API client.
///
/// Explicitly constructed and passed to callers; cheap to clone (the inner
/// `reqwest::Client` is reference-counted).
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PlatformClient {
    /// Create a client against the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: build_http(timeout),
            base_url,
            timeout,
        }
    }

    /// Create from the `PLATFORM_API_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| ApiError::Config(format!("{} not set", BASE_URL_ENV)))?;
        Ok(Self::new(base_url))
    }

    /// Replace the base URL (useful for staging environments and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `path` and deserialize the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// GET `path` with query parameters and deserialize the JSON response.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    /// POST a JSON body to `path` and deserialize the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// PATCH a JSON body to `path` and deserialize the JSON response.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
    }

    /// DELETE `path` and deserialize the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// Start a request against `path` for callers that need extra headers
    /// or other per-request configuration. Finish with [`execute`].
    ///
    /// [`execute`]: PlatformClient::execute
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a prepared request and deserialize the 2xx JSON response.
    ///
    /// Non-2xx statuses become [`ApiError::Http`] with the message/code
    /// recovered from the JSON error body; transport faults map onto the
    /// rest of the taxonomy.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            warn!(code = %err.code(), error = %err, "platform API request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), code = %err.code(), "platform API returned an error");
            return Err(err);
        }

        debug!(status = status.as_u16(), "platform API response");
        response.json::<T>().await.map_err(ApiError::from)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn build_http(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}
