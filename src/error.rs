//! Error types for the Designer News API client.
//!
//! This module contains the configuration error type and the crate-level
//! [`Error`] that unifies every failure the client can surface.
//!
//! # Error Handling
//!
//! Each layer has its own error type:
//!
//! - [`ConfigError`]: configuration and newtype validation
//! - [`HttpError`](crate::clients::HttpError): transport failures and non-2xx responses
//! - [`AuthError`](crate::auth::AuthError): password grant failures
//!
//! [`Error`] wraps all three for callers that prefer a single type.
//!
//! # Example
//!
//! ```rust
//! use designer_news::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::HttpError;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the client id issued for your application.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret issued for your application.")]
    EmptyClientSecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api-news.layervault.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Unified error type for every operation in the crate.
///
/// # Example
///
/// ```rust,ignore
/// use designer_news::Error;
///
/// async fn front_page(client: &designer_news::DesignerNews) -> Result<(), Error> {
///     let stories = client.stories().front_page(None).await?;
///     println!("{stories}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request failed at the transport level or returned a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The password grant failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}
