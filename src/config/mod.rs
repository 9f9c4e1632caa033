//! Configuration types for the Designer News API client.
//!
//! This module provides the configuration used to construct a
//! [`DesignerNews`](crate::DesignerNews) client.
//!
//! # Overview
//!
//! - [`DesignerNewsConfig`]: client credentials, base URL and user agent settings
//! - [`DesignerNewsConfigBuilder`]: a builder for [`DesignerNewsConfig`]
//! - [`ClientId`]: a validated client id newtype
//! - [`ClientSecret`]: a validated client secret with masked debug output
//! - [`BaseUrl`]: the service base URL, defaulting to the production host
//!
//! # Example
//!
//! ```rust
//! use designer_news::{DesignerNewsConfig, ClientId, ClientSecret};
//!
//! let config = DesignerNewsConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api-news.layervault.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ClientId, ClientSecret, API_PATH, TOKEN_PATH};

use crate::error::ConfigError;

/// Configuration for the Designer News API client.
///
/// `DesignerNewsConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use designer_news::{DesignerNewsConfig, ClientId, ClientSecret, BaseUrl};
///
/// let config = DesignerNewsConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct DesignerNewsConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl DesignerNewsConfig {
    /// Creates a new builder for constructing a `DesignerNewsConfig`.
    #[must_use]
    pub fn builder() -> DesignerNewsConfigBuilder {
        DesignerNewsConfigBuilder::new()
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DesignerNewsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DesignerNewsConfig>();
};

/// Builder for constructing [`DesignerNewsConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `base_url`: `https://api-news.layervault.com`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DesignerNewsConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl DesignerNewsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the service base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DesignerNewsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<DesignerNewsConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        Ok(DesignerNewsConfig {
            client_id,
            client_secret,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
