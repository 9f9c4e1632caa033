//! OAuth 2.0 Resource Owner Password Credentials Grant.
//!
//! Exchanges an end user's username and password, together with the
//! application's client id and secret, for a bearer access token. The
//! request is an unauthenticated form-encoded POST to `{base}/oauth/token`.
//!
//! # Example
//!
//! ```rust,ignore
//! use designer_news::auth::exchange_password;
//!
//! let session = exchange_password(&config, "user@example.com", "password").await?;
//! println!("Authenticated: {}", session.is_authenticated());
//! ```

use crate::auth::session::AccessTokenResponse;
use crate::auth::{AuthError, Session};
use crate::clients::{HttpClient, HttpError, HttpRequest, Params};
use crate::config::DesignerNewsConfig;

/// Grant type for the password flow.
const PASSWORD_GRANT_TYPE: &str = "password";

/// Builds the form body of a password-grant request.
fn password_grant_form(config: &DesignerNewsConfig, username: &str, password: &str) -> Params {
    Params::new()
        .with("grant_type", PASSWORD_GRANT_TYPE)
        .with("username", username)
        .with("password", password)
        .with("client_id", config.client_id().as_ref())
        .with("client_secret", config.client_secret().as_ref())
}

/// Exchanges user credentials for an access token.
///
/// On success, returns a new [`Session`] carrying the issued token. Nothing
/// is retried.
///
/// # Errors
///
/// - [`AuthError::PasswordGrantFailed`] if the token endpoint answers with a non-2xx status
/// - [`AuthError::MissingAccessToken`] if a 2xx answer has no `access_token`
/// - [`AuthError::Http`] if the request fails at the network level
pub async fn exchange_password(
    config: &DesignerNewsConfig,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let base_url = config.base_url().clone();
    let client = HttpClient::new(&Session::unauthenticated(base_url.clone()), Some(config));

    let request = HttpRequest::post(
        base_url.token_url(),
        Some(password_grant_form(config, username, password)),
    );

    let body = client.request(&request).await.map_err(|e| match e {
        HttpError::Response(response) => {
            tracing::warn!("Password grant rejected with status {}", response.code);
            AuthError::PasswordGrantFailed {
                status: response.code,
                message: response.message,
                body: response.body,
            }
        }
        other @ HttpError::Network(_) => AuthError::Http(other),
    })?;

    let token_response: AccessTokenResponse =
        serde_json::from_value(body).map_err(|_| AuthError::MissingAccessToken)?;

    let session = Session::from_access_token_response(base_url, &token_response);
    if !session.is_authenticated() {
        return Err(AuthError::MissingAccessToken);
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> DesignerNewsConfig {
        DesignerNewsConfig::builder()
            .client_id(ClientId::new("test-client-id").unwrap())
            .client_secret(ClientSecret::new("test-client-secret").unwrap())
            .base_url(BaseUrl::new(base_url).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_form_contains_grant_fields_in_order() {
        let config = create_config("https://example.com");
        let form = password_grant_form(&config, "user", "pass");

        assert_eq!(
            form.keys().collect::<Vec<_>>(),
            vec!["grant_type", "username", "password", "client_id", "client_secret"]
        );
        assert_eq!(form.get("grant_type"), Some("password"));
        assert_eq!(form.get("client_id"), Some("test-client-id"));
        assert_eq!(form.get("client_secret"), Some("test-client-secret"));
    }

    #[tokio::test]
    async fn test_successful_grant_returns_authenticated_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "grant_type=password&username=user&password=pass\
                 &client_id=test-client-id&client_secret=test-client-secret",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "T",
                "token_type": "bearer",
                "scope": "user"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri());
        let session = exchange_password(&config, "user", "pass").await.unwrap();

        assert_eq!(session.access_token.as_deref(), Some("T"));
        assert_eq!(session.authorization_header().as_deref(), Some("Bearer T"));
        assert_eq!(session.scope.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn test_rejected_grant_maps_to_password_grant_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_grant"
            })))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri());
        let result = exchange_password(&config, "user", "wrong").await;

        match result {
            Err(AuthError::PasswordGrantFailed {
                status,
                message,
                body,
            }) => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid_grant"));
                assert_eq!(body, Some(serde_json::json!({"error": "invalid_grant"})));
            }
            other => panic!("Expected PasswordGrantFailed, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_grant_with_non_json_body_has_no_decoded_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri());
        let error = exchange_password(&config, "user", "pass").await.unwrap_err();

        assert!(matches!(
            error,
            AuthError::PasswordGrantFailed { status: 503, body: None, .. }
        ));
        assert!(error.json_error().is_none());
    }

    #[tokio::test]
    async fn test_success_without_token_maps_to_missing_access_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "bearer"
            })))
            .mount(&mock_server)
            .await;

        let config = create_config(&mock_server.uri());
        let result = exchange_password(&config, "user", "pass").await;

        assert!(matches!(result, Err(AuthError::MissingAccessToken)));
    }

    #[tokio::test]
    async fn test_network_error_maps_to_http_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP connections
        let config = create_config("http://127.0.0.1:9");
        let result = exchange_password(&config, "user", "pass").await;

        assert!(matches!(
            result,
            Err(AuthError::Http(HttpError::Network(_)))
        ));
    }
}
