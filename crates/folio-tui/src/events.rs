//! UI event types.
//!
//! Everything the runtime feeds into the reducer: terminal input, the frame
//! tick, task lifecycle envelopes, and async results posted to the inbox.

use folio_core::api::types::{Blog, Comment, Identity, Post, User};
use folio_core::session::theme::ThemeSelection;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick: animations, soft timers, notice expiry.
    Tick,

    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// An async task finished; `completed.result` is the inner event to
    /// re-dispatch if the task is still the active one.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// The startup health probe resolved.
    ProbeFinished(Result<(), String>),

    /// Session restore settled (None = anonymous, the expected default).
    SessionRestored(Option<Identity>),

    /// A login attempt settled.
    LoginFinished(Result<Identity, String>),

    /// The initial theme selection was resolved.
    ThemeResolved(ThemeSelection),

    /// A data fetch or mutation settled.
    Data(DataEvent),
}

/// Results of data fetches and mutations. Identifier payloads let the
/// reducer drop results for views that are no longer mounted.
#[derive(Debug)]
pub enum DataEvent {
    /// The task was cancelled before producing a result.
    Cancelled,

    UsersLoaded(Result<Vec<User>, String>),

    PortfolioLoaded {
        user_id: i64,
        result: Result<(User, Vec<Blog>), String>,
    },

    BlogLoaded {
        blog_id: String,
        result: Result<(Blog, Vec<Post>), String>,
    },

    PostLoaded {
        post_id: String,
        result: Result<(Post, Vec<Comment>), String>,
    },

    MyPostsLoaded(Result<Vec<Post>, String>),

    PostCreated(Result<Post, String>),

    PostDeleted {
        post_id: String,
        result: Result<(), String>,
    },

    CommentCreated {
        post_id: String,
        result: Result<(), String>,
    },

    CommentDeleted {
        post_id: String,
        result: Result<(), String>,
    },
}
