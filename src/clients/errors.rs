//! HTTP-specific error types for the Designer News API client.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the API
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use designer_news::HttpError;
//!
//! match client.stories().get(13627).await {
//!     Ok(story) => println!("Story: {story}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-2xx response.
///
/// `message` is the raw response text. When the server answered with a JSON
/// error payload, the decoded payload is kept in `body`.
///
/// # Example
///
/// ```rust
/// use designer_news::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error":"invalid_token"}"#.to_string(),
///     body: Some(serde_json::json!({"error": "invalid_token"})),
/// };
///
/// assert_eq!(error.json_error(), Some("invalid_token"));
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// The response body decoded as JSON, if it was JSON.
    pub body: Option<serde_json::Value>,
}

impl HttpResponseError {
    /// Returns the `error` field of a JSON error payload, if present.
    #[must_use]
    pub fn json_error(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network, connection, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
