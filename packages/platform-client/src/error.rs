//! Typed errors for the platform API client.
//!
//! Uses `thiserror` for library errors (not `anyhow`). The taxonomy is
//! deliberately closed: every failure a request can produce maps to one of
//! the variants below, and `ApiError::code()` yields the machine-readable
//! code the rest of the stack keys on.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for platform API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the platform API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request exceeded the configured timeout and was aborted
    #[error("request timed out")]
    Timeout,

    /// DNS or connection-level failure before an HTTP response arrived
    #[error("no connection: {0}")]
    NoConnection(String),

    /// A 2xx response whose body could not be parsed as the expected JSON
    #[error("invalid response format: {0}")]
    InvalidFormat(String),

    /// A non-2xx HTTP response, with the best-effort message and code
    /// recovered from the JSON error body
    #[error("API error (status {status}): {message}")]
    Http {
        status: u16,
        code: String,
        message: String,
    },

    /// Anything else that prevented the request from completing
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Client construction failed (missing base URL, bad env)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

impl ApiError {
    /// Machine-readable code for this error.
    ///
    /// `Http` errors carry the backend-provided code when the error body had
    /// one, falling back to `HTTP_<status>`.
    pub fn code(&self) -> String {
        match self {
            ApiError::Timeout => "TIMEOUT".to_string(),
            ApiError::NoConnection(_) => "NO_CONNECTION".to_string(),
            ApiError::InvalidFormat(_) => "INVALID_FORMAT".to_string(),
            ApiError::Http { code, .. } => code.clone(),
            ApiError::RequestFailed(_) => "REQUEST_FAILED".to_string(),
            ApiError::Config(_) => "CONFIG".to_string(),
        }
    }

    /// HTTP status, when this error came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when this error represents a 404 from the backend.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build an `Http` error from a non-2xx status and its raw body.
    ///
    /// The body is parsed as `{message, code}` JSON; a body that is not
    /// parseable JSON (or omits the fields) falls back to `HTTP_<status>`
    /// and the raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let (message, code) = match parsed {
            Some(ErrorBody { message, code }) => (message, code),
            None => (None, None),
        };

        ApiError::Http {
            status,
            code: code.unwrap_or_else(|| format!("HTTP_{}", status)),
            message: message.unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                }
            }),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::NoConnection(err.to_string())
        } else if err.is_decode() {
            ApiError::InvalidFormat(err.to_string())
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_with_json_body() {
        let err = ApiError::from_response(
            422,
            r#"{"message": "Service type is required", "code": "MISSING_SERVICE_TYPE"}"#,
        );

        assert_eq!(err.code(), "MISSING_SERVICE_TYPE");
        assert_eq!(err.status(), Some(422));
        match err {
            ApiError::Http { message, .. } => assert_eq!(message, "Service type is required"),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_with_partial_json_body() {
        // Body parses but has no code field
        let err = ApiError::from_response(500, r#"{"message": "boom"}"#);

        assert_eq!(err.code(), "HTTP_500");
        match err {
            ApiError::Http { message, .. } => assert_eq!(message, "boom"),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_with_non_json_body() {
        let err = ApiError::from_response(503, "<html>Service Unavailable</html>");

        assert_eq!(err.code(), "HTTP_503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_from_response_with_empty_body() {
        let err = ApiError::from_response(404, "");

        assert_eq!(err.code(), "HTTP_404");
        assert!(err.is_not_found());
        match err {
            ApiError::Http { message, .. } => assert_eq!(message, "HTTP 404"),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ApiError::Timeout.code(), "TIMEOUT");
        assert_eq!(
            ApiError::NoConnection("dns failure".into()).code(),
            "NO_CONNECTION"
        );
        assert_eq!(
            ApiError::InvalidFormat("expected object".into()).code(),
            "INVALID_FORMAT"
        );
        assert_eq!(
            ApiError::RequestFailed("builder error".into()).code(),
            "REQUEST_FAILED"
        );
    }
}
