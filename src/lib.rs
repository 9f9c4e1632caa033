//! # Designer News API Client
//!
//! A Rust client for v1 of the Designer News API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DesignerNewsConfig`] and [`DesignerNewsConfigBuilder`]
//! - Validated newtypes for client credentials and the service base URL
//! - The OAuth 2.0 password grant via [`DesignerNews::authenticate`]
//! - One shared request mechanism ([`resources::Endpoint`]) behind every resource
//! - Resources for the current user, stories, comments and the message of the day
//!
//! The OAuth 2.0 authorization code flow is not included. Applications that
//! obtain an access token through it can pass the token to [`DesignerNews::new`].
//!
//! ## Quick Start
//!
//! ```rust
//! use designer_news::{DesignerNews, DesignerNewsConfig, ClientId, ClientSecret};
//!
//! let config = DesignerNewsConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // With a token obtained elsewhere
//! let client = DesignerNews::new(config, Some("access-token".to_string()));
//! assert!(client.is_authenticated());
//! ```
//!
//! ## Password Grant
//!
//! ```rust,ignore
//! let mut client = DesignerNews::new(config, None);
//! client.authenticate("user@example.com", "password").await?;
//! println!("Token: {:?}", client.access_token());
//! ```
//!
//! ## Making API Requests
//!
//! Every operation is one HTTP round trip and returns the decoded JSON body
//! as a [`serde_json::Value`].
//!
//! ```rust,ignore
//! use designer_news::Params;
//!
//! let me = client.me().get().await?;
//! let story = client.stories().get(13627).await?;
//! let page = client.stories().front_page(Some(Params::from([("page", 1)]))).await?;
//! let found = client.stories().search("Kelly Sutton").await?;
//! client.stories().upvote(13627).await?;
//! client.comments().reply(36524, "I agree.").await?;
//! let motd = client.motd().get().await?;
//! ```
//!
//! ## Errors
//!
//! Non-2xx responses surface as [`HttpError::Response`], network failures as
//! [`HttpError::Network`]. A 2xx response with an empty or non-JSON body
//! yields [`serde_json::Value::Null`]. Nothing is retried.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests and statuses at `debug`,
//! authentication at `info`/`warn`). Install a subscriber to see them.
//! Secrets and tokens are never logged.

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use auth::{AccessTokenResponse, AuthError, Session};
pub use client::DesignerNews;
pub use clients::{HttpError, HttpResponseError, Params, SDK_VERSION};
pub use config::{BaseUrl, ClientId, ClientSecret, DesignerNewsConfig, DesignerNewsConfigBuilder};
pub use error::{ConfigError, Error};
pub use resources::{Comments, Me, Motd, ResourceKind, Stories};
