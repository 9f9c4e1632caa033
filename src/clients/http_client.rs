//! HTTP transport for Designer News API communication.
//!
//! This module provides the [`HttpClient`] type, which sends one
//! [`HttpRequest`] with the session's bearer token and decodes the JSON answer.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{BaseUrl, DesignerNewsConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one [`Session`].
///
/// The client carries:
/// - The session's base URL, from which the API root is derived
/// - Default headers: `User-Agent`, `Accept`, and `Authorization` when the
///   session holds an access token
///
/// A client never changes after construction. When the access token changes,
/// a new client is built from the new session.
///
/// Each call to [`request`](Self::request) is a single round trip: there is no
/// retry and no timeout beyond reqwest's default.
///
/// # Example
///
/// ```rust,ignore
/// use designer_news::clients::{HttpClient, HttpRequest};
/// use designer_news::{BaseUrl, Session};
///
/// let session = Session::new(BaseUrl::default(), Some("token".to_string()));
/// let client = HttpClient::new(&session, None);
///
/// let request = HttpRequest::get(format!("{}/me", client.api_root()));
/// let profile = client.request(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Service base URL.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing base URL and access token
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(session: &Session, config: Option<&DesignerNewsConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(DesignerNewsConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Designer News API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(authorization) = session.authorization_header() {
            default_headers.insert("Authorization".to_string(), authorization);
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: session.base_url.clone(),
            default_headers,
        }
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the root of the versioned API (`{base}/api/v1`).
    #[must_use]
    pub fn api_root(&self) -> String {
        self.base_url.api_root()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and decodes the response body as JSON.
    ///
    /// GET requests carry no body. POST requests send their parameters
    /// `application/x-www-form-urlencoded`.
    ///
    /// A 2xx response returns the decoded JSON, or [`Value::Null`] when the
    /// body is empty or not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`), whether or not the body is JSON
    pub async fn request(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        tracing::debug!("Sending {} request to {}", request.method(), request.url());

        let mut req_builder = match request.method() {
            HttpMethod::Get => self.client.get(request.url()),
            HttpMethod::Post => self.client.post(request.url()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(form) = request.form() {
            req_builder = req_builder.form(form.as_slice());
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body_text = res.text().await?;

        tracing::debug!("Received status {} from {}", code, request.url());

        decode_response(code, &body_text)
    }
}

/// Turns a status code and body into the caller-facing result.
///
/// Non-2xx statuses always fail, keeping the decoded JSON error payload when
/// there is one. 2xx statuses with an empty or non-JSON body succeed with
/// [`Value::Null`].
fn decode_response(code: u16, body_text: &str) -> Result<Value, HttpError> {
    let parsed = if body_text.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(body_text).ok()
    };

    if (200..300).contains(&code) {
        return Ok(parsed.unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                tracing::debug!("Response body with status {} is not JSON, returning null", code);
            }
            Value::Null
        }));
    }

    Err(HttpError::Response(HttpResponseError {
        code,
        message: body_text.to_string(),
        body: parsed,
    }))
}
