//! HTTP client for the portfolio backend.
//!
//! One `ApiClient` lives for the whole session. The underlying reqwest client
//! owns a cookie jar, so the session credential set by `/auth/login` rides
//! along on every later request without explicit header plumbing.

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::{
    Blog, Comment, Identity, LoginRequest, NewComment, NewPost, Post, ThemePreference, User,
};

/// Standard User-Agent header for folio API requests.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        url::Url::parse(base_url)
            .with_context(|| format!("Invalid backend base URL: {base_url}"))?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// One-shot health check used by the startup probe and `folio status`.
    pub async fn health(&self) -> Result<()> {
        let response = self
            .http
            .get(self.endpoint("/api/health"))
            .send()
            .await
            .context("Could not reach the server")?;
        if !response.status().is_success() {
            bail!("Server responded with status {}", response.status());
        }
        Ok(())
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Resolves the identity behind the ambient session credential.
    pub async fn me(&self) -> Result<Identity> {
        self.get_json("/auth/me").await
    }

    /// Exchanges credentials for a session.
    ///
    /// Invalid credentials and transport failures both surface as errors; the
    /// messages differ so callers can show the right text without branching.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .context("Could not reach the server")?;
        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .context("Login response was malformed"),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                bail!("Invalid email or password")
            }
            status => bail!("Login failed (HTTP {status})"),
        }
    }

    /// Tells the backend to drop the session.
    pub async fn logout(&self) -> Result<()> {
        self.post_empty("/auth/logout").await
    }

    // ========================================================================
    // Users / blogs / posts / comments
    // ========================================================================

    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("/users").await
    }

    pub async fn user(&self, id: i64) -> Result<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    pub async fn blogs(&self) -> Result<Vec<Blog>> {
        self.get_json("/blogs").await
    }

    pub async fn blog(&self, id: &str) -> Result<Blog> {
        self.get_json(&format!("/blogs/{id}")).await
    }

    pub async fn blog_posts(&self, blog_id: &str) -> Result<Vec<Post>> {
        self.get_json(&format!("/blogs/{blog_id}/posts")).await
    }

    /// Posts owned by the signed-in user (dashboard listing).
    pub async fn my_posts(&self) -> Result<Vec<Post>> {
        self.get_json("/posts/my").await
    }

    pub async fn post(&self, id: &str) -> Result<Post> {
        self.get_json(&format!("/posts/{id}")).await
    }

    /// Creates a post and returns the stored record.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post> {
        self.post_json("/posts", &NewPost { title, content }).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<()> {
        self.delete(&format!("/posts/{id}")).await
    }

    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.get_json(&format!("/posts/{post_id}/comments")).await
    }

    pub async fn create_comment(&self, post_id: &str, content: &str) -> Result<()> {
        let path = format!("/posts/{post_id}/comments");
        let response = self
            .http
            .post(self.endpoint(&path))
            .json(&NewComment { content })
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        response
            .error_for_status()
            .with_context(|| format!("POST {path} failed"))?;
        Ok(())
    }

    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        self.delete(&format!("/comments/{id}")).await
    }

    // ========================================================================
    // Theme preference
    // ========================================================================

    /// Reads the server-stored theme preference for a user.
    ///
    /// A 404 means "no preference stored" and resolves to `Ok(None)`; other
    /// failures are real errors.
    pub async fn theme_preference(&self, user_id: i64) -> Result<Option<ThemePreference>> {
        let path = format!("/api/users/{user_id}/theme-preference");
        let response = self
            .http
            .get(self.endpoint(&path))
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response
            .error_for_status()
            .with_context(|| format!("GET {path} failed"))?;
        let pref = response
            .json()
            .await
            .with_context(|| format!("GET {path} returned malformed JSON"))?;
        Ok(Some(pref))
    }

    pub async fn save_theme_preference(
        &self,
        user_id: i64,
        preference: &ThemePreference,
    ) -> Result<()> {
        let path = format!("/api/users/{user_id}/theme-preference");
        let response = self
            .http
            .post(self.endpoint(&path))
            .json(preference)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        response
            .error_for_status()
            .with_context(|| format!("POST {path} failed"))?;
        Ok(())
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("GET {path} failed"))?;
        response
            .json()
            .await
            .with_context(|| format!("GET {path} returned malformed JSON"))
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("POST {path} failed"))?;
        response
            .json()
            .await
            .with_context(|| format!("POST {path} returned malformed JSON"))
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint(path))
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;
        response
            .error_for_status()
            .with_context(|| format!("POST {path} failed"))?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(path))
            .send()
            .await
            .with_context(|| format!("DELETE {path} failed"))?;
        response
            .error_for_status()
            .with_context(|| format!("DELETE {path} failed"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn users_parses_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":1,"name":"Laura","email":"laura@example.com"}]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let users = client.users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Laura");
    }

    #[tokio::test]
    async fn login_maps_rejection_to_credentials_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn login_distinguishes_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.login("a@b.com", "pw").await.unwrap_err();
        assert!(err.to_string().starts_with("Login failed"));
    }

    #[tokio::test]
    async fn session_cookie_rides_along_after_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/")
                    .set_body_raw(
                        r#"{"id":7,"email":"laura@example.com"}"#,
                        "application/json",
                    ),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id":7,"email":"laura@example.com"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let identity = client.login("laura@example.com", "pw").await.unwrap();
        assert_eq!(identity.id, 7);
        let me = client.me().await.unwrap();
        assert_eq!(me.email, "laura@example.com");
    }

    #[tokio::test]
    async fn theme_preference_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/7/theme-preference"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        assert_eq!(client.theme_preference(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_post_surfaces_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/p1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        assert!(client.delete_post("p1").await.is_err());
    }
}
