//! HTTP request descriptors.
//!
//! This module provides the [`HttpRequest`] type, the per-call description of
//! what the transport should send.

use std::fmt;

use crate::clients::Params;

/// HTTP methods used by the Designer News API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for votes, replies and token requests.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request to be sent by [`HttpClient`](crate::clients::HttpClient).
///
/// The URL is absolute and already carries any query string. Only POST
/// requests can carry a form body, which the constructors enforce.
///
/// Building the same descriptor twice yields equal values; descriptors have
/// no side effects until they are sent.
///
/// # Example
///
/// ```rust
/// use designer_news::clients::{HttpMethod, HttpRequest};
/// use designer_news::Params;
///
/// let get = HttpRequest::get("https://api-news.layervault.com/api/v1/me");
/// assert_eq!(get.method(), HttpMethod::Get);
/// assert!(get.form().is_none());
///
/// let post = HttpRequest::post(
///     "https://api-news.layervault.com/api/v1/comments/36524/reply",
///     Some(Params::from([("comment[body]", "I agree.")])),
/// );
/// assert_eq!(post.form().unwrap().get("comment[body]"), Some("I agree."));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    form: Option<Params>,
}

impl HttpRequest {
    /// Creates a GET request. GET requests never carry a body.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            form: None,
        }
    }

    /// Creates a POST request with an optional form-encoded body.
    ///
    /// An empty parameter set is treated the same as no body.
    #[must_use]
    pub fn post(url: impl Into<String>, form: Option<Params>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            form: form.filter(|f| !f.is_empty()),
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the absolute URL, including any query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the form body, if any.
    #[must_use]
    pub const fn form(&self) -> Option<&Params> {
        self.form.as_ref()
    }
}
