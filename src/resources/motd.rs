//! The message of the day.

use serde_json::Value;

use crate::clients::HttpError;
use crate::resources::{Endpoint, Resource, ResourceKind};

/// The `motd` resource.
///
/// ```rust,ignore
/// let motd = client.motd().get().await?;
/// client.motd().upvote().await?;
/// ```
#[derive(Clone, Debug)]
pub struct Motd {
    endpoint: Endpoint,
}

impl Motd {
    /// Fetches the current message of the day (`GET motd`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self) -> Result<Value, HttpError> {
        self.endpoint.get(None, None).await
    }

    /// Upvotes the message of the day (`POST motd/upvote`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn upvote(&self) -> Result<Value, HttpError> {
        self.endpoint.post(Some("upvote"), None).await
    }

    /// Downvotes the message of the day (`POST motd/downvote`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn downvote(&self) -> Result<Value, HttpError> {
        self.endpoint.post(Some("downvote"), None).await
    }
}

impl Resource for Motd {
    const KIND: ResourceKind = ResourceKind::Motd;

    fn from_endpoint(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
