//! Authentication types for the Designer News API client.
//!
//! - [`Session`]: the immutable base URL and access token used for API calls
//! - [`AccessTokenResponse`]: the decoded answer of the token endpoint
//! - [`exchange_password`]: the OAuth 2.0 password grant
//! - [`AuthError`]: failures of the password grant
//!
//! The OAuth 2.0 authorization code flow is not implemented. Applications
//! that obtain a token another way pass it to
//! [`DesignerNews::new`](crate::DesignerNews::new) directly.

mod error;
mod password_grant;
pub mod session;

pub use error::AuthError;
pub use password_grant::exchange_password;
pub use session::{AccessTokenResponse, Session};
