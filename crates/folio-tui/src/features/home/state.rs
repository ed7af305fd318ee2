//! Home page state: one pane per selection level.

use folio_core::api::types::{Blog, Comment, Identity, Post, User};

use crate::common::{Loadable, TextField};

/// Top-level users listing.
#[derive(Debug, Clone)]
pub struct UsersPane {
    pub users: Loadable<Vec<User>>,
    pub cursor: usize,
}

impl UsersPane {
    pub fn loading() -> Self {
        Self {
            users: Loadable::Loading,
            cursor: 0,
        }
    }

    pub fn selected(&self) -> Option<&User> {
        self.users.ready().and_then(|users| users.get(self.cursor))
    }
}

/// A user plus their blogs.
#[derive(Debug, Clone)]
pub struct PortfolioPane {
    pub user_id: i64,
    pub data: Loadable<(User, Vec<Blog>)>,
    pub cursor: usize,
}

impl PortfolioPane {
    pub fn loading(user_id: i64) -> Self {
        Self {
            user_id,
            data: Loadable::Loading,
            cursor: 0,
        }
    }

    pub fn selected_blog(&self) -> Option<&Blog> {
        self.data
            .ready()
            .and_then(|(_, blogs)| blogs.get(self.cursor))
    }
}

/// A blog plus its posts, with a client-side title filter.
#[derive(Debug, Clone)]
pub struct BlogPane {
    pub blog_id: String,
    pub data: Loadable<(Blog, Vec<Post>)>,
    pub cursor: usize,
    pub filter: TextField,
    pub filtering: bool,
}

impl BlogPane {
    pub fn loading(blog_id: String) -> Self {
        Self {
            blog_id,
            data: Loadable::Loading,
            cursor: 0,
            filter: TextField::new(),
            filtering: false,
        }
    }

    /// Posts passing the title filter, in listing order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        let Some((_, posts)) = self.data.ready() else {
            return Vec::new();
        };
        let needle = self.filter.value().trim().to_lowercase();
        posts
            .iter()
            .filter(|post| needle.is_empty() || post.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_post_id(&self) -> Option<String> {
        self.visible_posts().get(self.cursor).map(|post| post.id.clone())
    }
}

/// A post plus its comments and the comment composer.
#[derive(Debug, Clone)]
pub struct PostPane {
    pub post_id: String,
    pub data: Loadable<(Post, Vec<Comment>)>,
    pub cursor: usize,
    pub comment: TextField,
    pub composing: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl PostPane {
    pub fn loading(post_id: String) -> Self {
        Self {
            post_id,
            data: Loadable::Loading,
            cursor: 0,
            comment: TextField::new(),
            composing: false,
            submitting: false,
            error: None,
        }
    }

    pub fn selected_comment(&self) -> Option<&Comment> {
        self.data
            .ready()
            .and_then(|(_, comments)| comments.get(self.cursor))
    }
}

#[derive(Debug, Clone)]
pub struct HomeState {
    pub users: UsersPane,
    pub portfolio: Option<PortfolioPane>,
    pub blog: Option<BlogPane>,
    pub post: Option<PostPane>,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            users: UsersPane::loading(),
            portfolio: None,
            blog: None,
            post: None,
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the viewer may delete a comment: author ids are opaque strings,
/// so the numeric identity id is string-compared against the comment author.
pub fn can_delete_comment(identity: Option<&Identity>, comment: &Comment) -> bool {
    identity.is_some_and(|identity| identity.id.to_string() == comment.author_id)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn comment(author_id: &str) -> Comment {
        Comment {
            id: "c1".to_string(),
            content: "nice".to_string(),
            author: "Mario".to_string(),
            author_id: author_id.to_string(),
            created_at: Utc::now(),
        }
    }

    fn identity(id: i64) -> Identity {
        Identity {
            id,
            email: "x@example.com".to_string(),
        }
    }

    #[test]
    fn author_may_delete_own_comment() {
        assert!(can_delete_comment(Some(&identity(7)), &comment("7")));
    }

    #[test]
    fn non_author_may_not_delete() {
        assert!(!can_delete_comment(Some(&identity(8)), &comment("7")));
    }

    #[test]
    fn anonymous_may_not_delete() {
        assert!(!can_delete_comment(None, &comment("7")));
    }

    #[test]
    fn filter_narrows_visible_posts() {
        let post = |id: &str, title: &str| Post {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            author: None,
            blog_title: None,
            created_at: Utc::now(),
            comment_count: None,
        };
        let mut pane = BlogPane::loading("b1".to_string());
        pane.data = Loadable::Ready((
            Blog {
                id: "b1".to_string(),
                title: "Blog".to_string(),
                description: String::new(),
                author: "Laura".to_string(),
                author_id: 1,
                created_at: Utc::now(),
                post_count: None,
            },
            vec![post("p1", "Snowboarding"), post("p2", "Languages")],
        ));

        assert_eq!(pane.visible_posts().len(), 2);
        pane.filter.handle_paste("snow");
        let visible = pane.visible_posts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p1");
    }
}
