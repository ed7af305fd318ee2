//! Identity session operations.
//!
//! The auth state machine itself lives with the UI; these are the network
//! halves of its transitions.

use crate::api::types::Identity;
use crate::api::ApiClient;

/// Attempts to restore an existing backend session via `/auth/me`.
///
/// A missing or expired session is the expected default, not an error: any
/// failure resolves to `None` and is logged at debug level only.
pub async fn restore(api: &ApiClient) -> Option<Identity> {
    match api.me().await {
        Ok(identity) => Some(identity),
        Err(err) => {
            tracing::debug!("no session restored: {err:#}");
            None
        }
    }
}

/// Exchanges credentials for an identity.
///
/// Failures come back as the user-facing message to display inline; the
/// client already phrases invalid credentials and transport problems apart.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Identity, String> {
    api.login(email, password)
        .await
        .map_err(|err| err.to_string())
}

/// Notifies the backend of a logout, best-effort.
///
/// The local session is already gone by the time this runs; the backend
/// result is logged and discarded.
pub async fn notify_logout(api: &ApiClient) {
    if let Err(err) = api.logout().await {
        tracing::warn!("logout notification failed: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn restore_resolves_identity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id":3,"email":"mario@example.com"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).unwrap();
        let identity = restore(&api).await.unwrap();
        assert_eq!(identity.id, 3);
    }

    #[tokio::test]
    async fn restore_treats_missing_session_as_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).unwrap();
        assert!(restore(&api).await.is_none());
    }

    #[tokio::test]
    async fn login_failure_becomes_displayable_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri()).unwrap();
        let err = login(&api, "a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err, "Invalid email or password");
    }
}
