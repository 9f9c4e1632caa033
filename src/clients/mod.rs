//! HTTP client types for Designer News API communication.
//!
//! This module provides the request-building and transport layer shared by
//! every resource.
//!
//! # Overview
//!
//! - [`build_url`]: composes `{api_root}/{root}[/{path}][?{query}]`
//! - [`Params`]: insertion-ordered parameters for query strings and form bodies
//! - [`HttpRequest`]: the per-call request descriptor
//! - [`HttpClient`]: sends a request with the session's bearer token and decodes JSON
//! - [`HttpError`]: transport and status failures
//!
//! # Example
//!
//! ```rust,ignore
//! use designer_news::clients::{build_url, HttpClient, HttpRequest};
//! use designer_news::{BaseUrl, Params, Session};
//!
//! let session = Session::new(BaseUrl::default(), Some("token".to_string()));
//! let client = HttpClient::new(&session, None);
//!
//! let url = build_url(&client.api_root(), "stories", None, Some(&Params::from([("page", 1)])));
//! let stories = client.request(&HttpRequest::get(url)).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod params;
mod url;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use params::Params;
pub use url::build_url;
