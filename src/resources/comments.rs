//! Comments on stories.

use serde_json::Value;

use crate::clients::{HttpError, Params};
use crate::resources::stories::COMMENT_BODY_KEY;
use crate::resources::{Endpoint, Resource, ResourceKind};

/// The `comments` resource.
#[derive(Clone, Debug)]
pub struct Comments {
    endpoint: Endpoint,
}

impl Comments {
    /// Fetches a single comment (`GET comments/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: u64) -> Result<Value, HttpError> {
        self.endpoint.get(Some(&id.to_string()), None).await
    }

    /// Upvotes a comment (`POST comments/{id}/upvote`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn upvote(&self, id: u64) -> Result<Value, HttpError> {
        self.endpoint.post(Some(&format!("{id}/upvote")), None).await
    }

    /// Replies to a comment (`POST comments/{id}/reply` with `comment[body]`).
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

impl Resource for Comments {
    const KIND: ResourceKind = ResourceKind::Comments;

    fn from_endpoint(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
