//! Wire types for the portfolio backend REST API.
//!
//! The backend speaks camelCase JSON; user ids are numeric, every other id is
//! an opaque string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeColors;

/// The signed-in principal, as returned by `/auth/me` and `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub post_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub blog_title: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comment_count: Option<u64>,
}

/// A comment on a post. `author_id` is an opaque string; authorization
/// checks compare it against the stringified identity id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

/// Server-stored theme preference for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub theme_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<ThemeColors>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewComment<'a> {
    pub content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_deserializes_camel_case() {
        let blog: Blog = serde_json::from_str(
            r#"{
                "id": "b1",
                "title": "Snow notes",
                "description": "Little stories",
                "author": "Laura",
                "authorId": 3,
                "createdAt": "2026-01-12T09:30:00Z",
                "postCount": 4
            }"#,
        )
        .unwrap();
        assert_eq!(blog.author_id, 3);
        assert_eq!(blog.post_count, Some(4));
    }

    #[test]
    fn post_tolerates_missing_optionals() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": "p1",
                "title": "First",
                "content": "hello",
                "createdAt": "2026-02-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(post.author.is_none());
        assert!(post.blog_title.is_none());
    }

    #[test]
    fn theme_preference_omits_absent_custom_colors() {
        let pref = ThemePreference {
            theme_id: "ocean".to_string(),
            custom_colors: None,
        };
        let json = serde_json::to_string(&pref).unwrap();
        assert_eq!(json, r#"{"themeId":"ocean"}"#);
    }
}
