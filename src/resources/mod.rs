//! Designer News API resources.
//!
//! Every resource embeds an [`Endpoint`] bound to one root path and defines
//! its operations as calls to [`Endpoint::get`] and [`Endpoint::post`].
//!
//! | Resource     | Root       | Operations                                                  |
//! |--------------|------------|-------------------------------------------------------------|
//! | [`Me`]       | `me`       | `get`                                                       |
//! | [`Stories`]  | `stories`  | `get`, `front_page`, `recent`, `search`, `upvote`, `reply`  |
//! | [`Comments`] | `comments` | `get`, `upvote`, `reply`                                    |
//! | [`Motd`]     | `motd`     | `get`, `upvote`, `downvote`                                 |
//!
//! [`Resources`] is the fixed registry the client builds for each session.

mod comments;
mod endpoint;
mod me;
mod motd;
mod stories;

use std::fmt;
use std::sync::Arc;

use crate::clients::HttpClient;

pub use comments::Comments;
pub use endpoint::Endpoint;
pub use me::Me;
pub use motd::Motd;
pub use stories::Stories;

/// The known resource kinds, in registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The authenticated user's profile.
    Me,
    /// Stories.
    Stories,
    /// Comments.
    Comments,
    /// The message of the day.
    Motd,
}

impl ResourceKind {
    /// Every resource kind, in the order the client attaches them.
    pub const ALL: [Self; 4] = [Self::Me, Self::Stories, Self::Comments, Self::Motd];

    /// Returns the accessor name of this resource.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Stories => "stories",
            Self::Comments => "comments",
            Self::Motd => "motd",
        }
    }

    /// Returns the root path of this resource under the API root.
    #[must_use]
    pub const fn root(self) -> &'static str {
        // Accessor names and root paths coincide for every current resource.
        self.name()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource definition: a root path plus operations on an [`Endpoint`].
pub trait Resource: Sized {
    /// Which resource this is.
    const KIND: ResourceKind;

    /// Wraps an endpoint already bound to [`Self::KIND`]'s root.
    fn from_endpoint(endpoint: Endpoint) -> Self;

    /// Returns the embedded endpoint.
    fn endpoint(&self) -> &Endpoint;

    /// Creates this resource bound to `http_client`.
    #[must_use]
    fn attach(http_client: &Arc<HttpClient>) -> Self {
        Self::from_endpoint(Endpoint::new(Self::KIND.root(), Arc::clone(http_client)))
    }
}

/// One instance of every resource, all bound to the same transport.
///
/// Built as a whole and replaced as a whole; there is no way to rebind a
/// single resource to a different session.
#[derive(Clone, Debug)]
pub struct Resources {
    me: Me,
    stories: Stories,
    comments: Comments,
    motd: Motd,
}

impl Resources {
    /// Attaches every resource in [`ResourceKind::ALL`] to `http_client`.
    #[must_use]
    pub fn attach(http_client: &Arc<HttpClient>) -> Self {
        Self {
            me: Me::attach(http_client),
            stories: Stories::attach(http_client),
            comments: Comments::attach(http_client),
            motd: Motd::attach(http_client),
        }
    }

    /// Returns the endpoint of the given resource kind.
    #[must_use]
    pub fn endpoint(&self, kind: ResourceKind) -> &Endpoint {
        match kind {
            ResourceKind::Me => self.me.endpoint(),
            ResourceKind::Stories => self.stories.endpoint(),
            ResourceKind::Comments => self.comments.endpoint(),
            ResourceKind::Motd => self.motd.endpoint(),
        }
    }

    /// Returns the `me` resource.
    #[must_use]
    pub const fn me(&self) -> &Me {
        &self.me
    }

    /// Returns the `stories` resource.
    #[must_use]
    pub const fn stories(&self) -> &Stories {
        &self.stories
    }

    /// Returns the `comments` resource.
    #[must_use]
    pub const fn comments(&self) -> &Comments {
        &self.comments
    }

    /// Returns the `motd` resource.
    #[must_use]
    pub const fn motd(&self) -> &Motd {
        &self.motd
    }
}
