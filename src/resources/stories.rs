//! Stories: the front page, recent submissions, search, votes and replies.

use serde_json::Value;

use crate::clients::{HttpError, Params};
use crate::resources::{Endpoint, Resource, ResourceKind};

/// Form key of a reply's text.
pub(crate) const COMMENT_BODY_KEY: &str = "comment[body]";

/// The `stories` resource.
///
/// # Example
///
/// ```rust,ignore
/// use designer_news::Params;
///
/// let story = client.stories().get(13627).await?;
/// let front_page = client.stories().front_page(Some(Params::from([("page", 2)]))).await?;
/// let results = client.stories().search("Kelly Sutton").await?;
/// client.stories().upvote(13627).await?;
/// client.stories().reply(13627, "A logo should tell a story.").await?;
/// ```
#[derive(Clone, Debug)]
pub struct Stories {
    endpoint: Endpoint,
}

impl Stories {
    /// Fetches a single story (`GET stories/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: u64) -> Result<Value, HttpError> {
        self.endpoint.get(Some(&id.to_string()), None).await
    }

    /// Fetches the front page (`GET stories?{params}`), e.g. with `page`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn front_page(&self, params: Option<Params>) -> Result<Value, HttpError> {
        self.endpoint.get(None, params).await
    }

    /// Fetches the most recent stories (`GET stories/recent?{params}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn recent(&self, params: Option<Params>) -> Result<Value, HttpError> {
        self.endpoint.get(Some("recent"), params).await
    }

    /// Searches stories (`GET stories/search?query={query}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn search(&self, query: &str) -> Result<Value, HttpError> {
        self.endpoint
            .get(Some("search"), Some(Params::from([("query", query)])))
            .await
    }

    /// Upvotes a story (`POST stories/{id}/upvote`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn upvote(&self, id: u64) -> Result<Value, HttpError> {
        self.endpoint.post(Some(&format!("{id}/upvote")), None).await
    }

    /// Replies to a story (`POST stories/{id}/reply` with `comment[body]`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn reply(&self, id: u64, comment: &str) -> Result<Value, HttpError> {
        self.endpoint
            .post(
                Some(&format!("{id}/reply")),
                Some(Params::from([(COMMENT_BODY_KEY, comment)])),
            )
            .await
    }
}

impl Resource for Stories {
    const KIND: ResourceKind = ResourceKind::Stories;

    fn from_endpoint(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
