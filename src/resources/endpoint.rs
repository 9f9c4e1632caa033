//! The shared `get`/`post` capability every resource is built on.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{build_url, HttpClient, HttpError, HttpRequest, Params};

/// Request-building and sending for one resource root.
///
/// An `Endpoint` pairs a root path (e.g. `"stories"`) with the transport of
/// the session it was created for. Resources embed one and express their
/// operations as calls to [`get`](Self::get) and [`post`](Self::post).
///
/// Cloning is cheap: the transport is shared.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use designer_news::clients::{HttpClient, HttpMethod};
/// use designer_news::resources::Endpoint;
/// use designer_news::{BaseUrl, Params, Session};
///
/// let session = Session::new(BaseUrl::default(), Some("T".to_string()));
/// let endpoint = Endpoint::new("stories", Arc::new(HttpClient::new(&session, None)));
///
/// let request = endpoint.get_request(None, Some(Params::from([("page", 1)])));
/// assert_eq!(request.method(), HttpMethod::Get);
/// assert_eq!(request.url(), "https://api-news.layervault.com/api/v1/stories?page=1");
/// ```
#[derive(Clone, Debug)]
pub struct Endpoint {
    root: &'static str,
    http_client: Arc<HttpClient>,
}

impl Endpoint {
    /// Creates an endpoint for `root` bound to `http_client`.
    #[must_use]
    pub const fn new(root: &'static str, http_client: Arc<HttpClient>) -> Self {
        Self { root, http_client }
    }

    /// Returns the root path of this endpoint.
    #[must_use]
    pub const fn root(&self) -> &'static str {
        self.root
    }

    /// Returns the transport this endpoint sends through.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the GET descriptor for `path` with `params` as the query string.
    #[must_use]
    pub fn get_request(&self, path: Option<&str>, params: Option<Params>) -> HttpRequest {
        let api_root = self.http_client.api_root();
        HttpRequest::get(build_url(&api_root, self.root, path, params.as_ref()))
    }

    /// Builds the POST descriptor for `path` with `params` as the form body.
    ///
    /// POST URLs never carry a query string.
    #[must_use]
    pub fn post_request(&self, path: Option<&str>, params: Option<Params>) -> HttpRequest {
        let api_root = self.http_client.api_root();
        HttpRequest::post(build_url(&api_root, self.root, path, None), params)
    }

    /// Issues a GET to `{root}[/{path}][?{params}]`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, path: Option<&str>, params: Option<Params>) -> Result<Value, HttpError> {
        self.http_client
            .request(&self.get_request(path, params))
            .await
    }

    /// Issues a POST to `{root}[/{path}]` with `params` form-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn post(&self, path: Option<&str>, params: Option<Params>) -> Result<Value, HttpError> {
        self.http_client
            .request(&self.post_request(path, params))
            .await
    }
}
