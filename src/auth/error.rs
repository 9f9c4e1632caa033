//! Authentication error types for the Designer News API client.
//!
//! # Error Types
//!
//! - [`AuthError::PasswordGrantFailed`]: the token endpoint rejected the grant
//! - [`AuthError::MissingAccessToken`]: the token endpoint answered without a token
//! - [`AuthError::Http`]: the request never produced a response
//!
//! # Example
//!
//! ```rust
//! use designer_news::auth::AuthError;
//!
//! let error = AuthError::PasswordGrantFailed {
//!     status: 401,
//!     message: r#"{"error":"invalid_grant"}"#.to_string(),
//!     body: Some(serde_json::json!({"error": "invalid_grant"})),
//! };
//! assert!(error.to_string().contains("401"));
//! assert_eq!(error.json_error().unwrap()["error"], "invalid_grant");
//! ```

use crate::clients::HttpError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint returned a non-success HTTP status.
    ///
    /// This covers bad user credentials as well as an unknown client id or
    /// secret. `message` holds the raw error payload and `body` its decoded
    /// JSON, when the payload is JSON.
    #[error("Password grant failed with status {status}: {message}")]
    PasswordGrantFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error payload from the response.
        message: String,
        /// The error payload decoded as JSON, if it was JSON.
        body: Option<Value>,
    },

    /// The token endpoint answered successfully but without an `access_token`.
    #[error("Token response did not contain an access_token")]
    MissingAccessToken,

    /// Wrapped HTTP client error.
    ///
    /// The token request failed before a response was received.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AuthError {
    /// Returns the decoded JSON error payload of a rejected grant, if any.
    #[must_use]
    pub const fn json_error(&self) -> Option<&Value> {
        match self {
            Self::PasswordGrantFailed { body, .. } => body.as_ref(),
            Self::Http(HttpError::Response(response)) => response.body.as_ref(),
            _ => None,
        }
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
