//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Path of the versioned API root, relative to the base URL.
pub const API_PATH: &str = "/api/v1";

/// Path of the OAuth token endpoint, relative to the base URL.
///
/// The token endpoint lives outside the versioned API root.
pub const TOKEN_PATH: &str = "/oauth/token";

/// A validated Designer News client id.
///
/// Client ids are issued out-of-band when an application is registered.
///
/// # Example
///
/// ```rust
/// use designer_news::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Designer News client secret.
///
/// The `Debug` implementation masks the secret, displaying only
/// `ClientSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use designer_news::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// The service base URL, e.g. `https://api-news.layervault.com`.
///
/// Only `http` and `https` schemes are accepted. A trailing `/` is trimmed so
/// that paths can be appended with a single separator. Query strings and
/// fragments are rejected.
///
/// # Example
///
/// ```rust
/// use designer_news::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// assert_eq!(url.api_root(), "http://localhost:3000/api/v1");
/// assert_eq!(url.token_url(), "http://localhost:3000/oauth/token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Designer News host.
    pub const DEFAULT: &'static str = "https://api-news.layervault.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not
    /// `http`/`https`, the host is empty, or the URL carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let (scheme, rest) = trimmed.split_once("://").ok_or_else(invalid)?;
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host = rest.split(['/', ':']).next().unwrap_or_default();
        if host.is_empty() || rest.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the root of the versioned API (`{base}/api/v1`).
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}{API_PATH}", self.0)
    }

    /// Returns the password-grant token endpoint (`{base}/oauth/token`).
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}{TOKEN_PATH}", self.0)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
