//! The Designer News client facade.
//!
//! [`DesignerNews`] owns the configuration, the current [`Session`], and one
//! instance of every resource bound to that session.

use std::sync::Arc;

use crate::auth::{exchange_password, AuthError, Session};
use crate::clients::HttpClient;
use crate::config::DesignerNewsConfig;
use crate::resources::{Comments, Endpoint, Me, Motd, ResourceKind, Resources, Stories};

/// Client for the Designer News API.
///
/// A client is either unauthenticated (no access token) or authenticated.
/// It starts authenticated when constructed with a token, and becomes
/// authenticated after a successful [`authenticate`](Self::authenticate).
///
/// Every resource accessor returns a resource bound to the *current*
/// session. Re-authenticating replaces the session, the transport and every
/// resource at once.
///
/// # Example
///
/// ```rust,ignore
/// use designer_news::{DesignerNews, DesignerNewsConfig, ClientId, ClientSecret, Params};
///
/// let config = DesignerNewsConfig::builder()
///     .client_id(ClientId::new("client-id")?)
///     .client_secret(ClientSecret::new("client-secret")?)
///     .build()?;
///
/// let mut client = DesignerNews::new(config, None);
/// client.authenticate("user@example.com", "password").await?;
///
/// let me = client.me().get().await?;
/// let stories = client.stories().front_page(Some(Params::from([("page", 1)]))).await?;
/// client.comments().reply(36524, "I agree.").await?;
/// ```
#[derive(Debug)]
pub struct DesignerNews {
    config: DesignerNewsConfig,
    session: Session,
    resources: Resources,
}

// Verify DesignerNews is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DesignerNews>();
};

impl DesignerNews {
    /// Creates a client, optionally with a pre-obtained access token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use designer_news::{DesignerNews, DesignerNewsConfig, ClientId, ClientSecret};
    ///
    /// let config = DesignerNewsConfig::builder()
    ///     .client_id(ClientId::new("id").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = DesignerNews::new(config, Some("USER_SECRET_ACCESS_TOKEN".to_string()));
    /// assert!(client.is_authenticated());
    /// assert_eq!(client.access_token(), Some("USER_SECRET_ACCESS_TOKEN"));
    /// ```
    #[must_use]
    pub fn new(config: DesignerNewsConfig, access_token: Option<String>) -> Self {
        let session = Session::new(config.base_url().clone(), access_token);
        let resources = Self::attach_resources(&session, &config);

        Self {
            config,
            session,
            resources,
        }
    }

    /// Obtains an access token with the password grant and rebinds every resource.
    ///
    /// On failure the client keeps its previous session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the token request fails, is rejected, or the
    /// response carries no `access_token`.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let session = exchange_password(&self.config, username, password).await?;
        self.install_session(session);
        tracing::info!("Authenticated with Designer News, session replaced");
        Ok(())
    }

    /// Replaces the current session and rebuilds every resource for it.
    fn install_session(&mut self, session: Session) {
        self.resources = Self::attach_resources(&session, &self.config);
        self.session = session;
    }

    fn attach_resources(session: &Session, config: &DesignerNewsConfig) -> Resources {
        let http_client = Arc::new(HttpClient::new(session, Some(config)));
        Resources::attach(&http_client)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DesignerNewsConfig {
        &self.config
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    /// Returns `true` if the client holds an access token.
    ///
    /// Resource calls on an unauthenticated client are still sent, without an
    /// `Authorization` header; the server decides how to answer them.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Returns the `me` resource.
    #[must_use]
    pub const fn me(&self) -> &Me {
        self.resources.me()
    }

    /// Returns the `stories` resource.
    #[must_use]
    pub const fn stories(&self) -> &Stories {
        self.resources.stories()
    }

    /// Returns the `comments` resource.
    #[must_use]
    pub const fn comments(&self) -> &Comments {
        self.resources.comments()
    }

    /// Returns the `motd` resource.
    #[must_use]
    pub const fn motd(&self) -> &Motd {
        self.resources.motd()
    }

    /// Returns the raw endpoint of a resource kind, for calls not covered
    /// by the typed resources.
    #[must_use]
    pub fn resource(&self, kind: ResourceKind) -> &Endpoint {
        self.resources.endpoint(kind)
    }
}
