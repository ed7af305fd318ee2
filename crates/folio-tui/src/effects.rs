//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! touches the network or the filesystem.

use folio_core::api::types::Identity;
use folio_core::theme::ThemeColors;

use crate::common::TaskKind;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Issue the one-shot startup health probe.
    Probe,

    /// Attempt to restore an existing session (`/auth/me`).
    RestoreSession,

    /// Exchange credentials for a session.
    Login { email: String, password: String },

    /// Tell the backend the session ended. Best-effort, result logged only.
    NotifyLogout,

    /// Resolve the initial theme selection (after auth restore settles).
    InitTheme { identity: Option<Identity> },

    /// Write the preferred palette id to local prefs.
    PersistTheme { id: String },

    /// Write custom palette colors to local prefs.
    PersistCustomTheme { colors: ThemeColors },

    /// Push the active selection to the backend. Best-effort.
    SyncThemePreference,

    /// Fetch the top-level users listing.
    LoadUsers,

    /// Fetch a user plus their blogs.
    LoadPortfolio { user_id: i64 },

    /// Fetch a blog plus its posts.
    LoadBlog { blog_id: String },

    /// Fetch a post plus its comments.
    LoadPost { post_id: String },

    /// Fetch the signed-in user's posts (dashboard).
    LoadMyPosts,

    CreatePost { title: String, content: String },

    DeletePost { post_id: String },

    CreateComment { post_id: String, content: String },

    DeleteComment { post_id: String, comment_id: String },

    /// Cancel the in-flight task of the given kind, if any.
    CancelTask { kind: TaskKind },
}
