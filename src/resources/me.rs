//! The authenticated user's profile.

use serde_json::Value;

use crate::clients::HttpError;
use crate::resources::{Endpoint, Resource, ResourceKind};

/// The `me` resource.
///
/// ```rust,ignore
/// let profile = client.me().get().await?;
/// println!("{}", profile["me"]["first_name"]);
/// ```
#[derive(Clone, Debug)]
pub struct Me {
    endpoint: Endpoint,
}

impl Me {
    /// Fetches the authenticated user's profile (`GET me`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self) -> Result<Value, HttpError> {
        self.endpoint.get(None, None).await
    }
}

impl Resource for Me {
    const KIND: ResourceKind = ResourceKind::Me;

    fn from_endpoint(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
