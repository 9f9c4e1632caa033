//! Session management for Designer News API authentication.
//!
//! This module provides the [`Session`] type, the immutable bundle of base URL
//! and access token shared by every resource of one client.

use std::fmt;

use serde::Deserialize;

use crate::config::BaseUrl;

/// Response from the OAuth token endpoint.
///
/// `token_type` and `scope` are optional because the service does not
/// always return them.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The issued access token.
    pub access_token: String,
    /// The token type, normally `"bearer"`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// The granted scope.
    #[serde(default)]
    pub scope: Option<String>,
}

/// The authentication state used for Designer News API calls.
///
/// Sessions are immutable. When the access token changes, the client builds
/// a new session instead of updating this one.
///
/// # Example
///
/// ```rust
/// use designer_news::{BaseUrl, Session};
///
/// let session = Session::new(BaseUrl::default(), Some("T".to_string()));
/// assert!(session.is_authenticated());
/// assert_eq!(session.authorization_header().as_deref(), Some("Bearer T"));
///
/// let anonymous = Session::unauthenticated(BaseUrl::default());
/// assert!(anonymous.authorization_header().is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The service base URL.
    pub base_url: BaseUrl,

    /// The bearer access token, if one has been obtained.
    pub access_token: Option<String>,

    /// Token type reported by the token endpoint, if any.
    pub token_type: Option<String>,

    /// Scope reported by the token endpoint, if any.
    pub scope: Option<String>,
}

impl Session {
    /// Creates a session from a pre-obtained access token.
    ///
    /// An empty token is treated as no token.
    #[must_use]
    pub fn new(base_url: BaseUrl, access_token: Option<String>) -> Self {
        Self {
            base_url,
            access_token: access_token.filter(|t| !t.is_empty()),
            token_type: None,
            scope: None,
        }
    }

    /// Creates a session without an access token.
    #[must_use]
    pub const fn unauthenticated(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            access_token: None,
            token_type: None,
            scope: None,
        }
    }

    /// Creates a session from a token endpoint response.
    #[must_use]
    pub fn from_access_token_response(base_url: BaseUrl, response: &AccessTokenResponse) -> Self {
        Self {
            base_url,
            access_token: Some(response.access_token.clone()).filter(|t| !t.is_empty()),
            token_type: response.token_type.clone(),
            scope: response.scope.clone(),
        }
    }

    /// Returns `true` if this session holds an access token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns the `Authorization` header value (`Bearer <token>`), if a token is held.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "*****"),
            )
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
