//! Dashboard state: my posts, the new-post editor, transient notices.

use std::time::{Duration, Instant};

use folio_core::api::types::Post;

use crate::common::{Loadable, TextField};

/// How long success notices stay on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// A transient success notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub shown_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}

/// Which editor field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostField {
    #[default]
    Title,
    Content,
}

/// The new-post editor.
#[derive(Debug, Clone)]
pub struct NewPostForm {
    pub title: TextField,
    pub content: TextField,
    pub focus: PostField,
    pub saving: bool,
    pub error: Option<String>,
}

impl NewPostForm {
    pub fn new() -> Self {
        Self {
            title: TextField::new(),
            content: TextField::multiline(),
            focus: PostField::Title,
            saving: false,
            error: None,
        }
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            PostField::Title => &mut self.title,
            PostField::Content => &mut self.content,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PostField::Title => PostField::Content,
            PostField::Content => PostField::Title,
        };
    }
}

impl Default for NewPostForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub posts: Loadable<Vec<Post>>,
    pub cursor: usize,
    pub form: Option<NewPostForm>,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

impl DashboardState {
    pub fn loading() -> Self {
        Self {
            posts: Loadable::Loading,
            cursor: 0,
            form: None,
            error: None,
            notice: None,
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.ready().and_then(|posts| posts.get(self.cursor))
    }

    /// Per-tick housekeeping: drops expired notices.
    pub fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::expired) {
            self.notice = None;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::loading()
    }
}
