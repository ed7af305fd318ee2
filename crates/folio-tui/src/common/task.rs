//! Async task lifecycle state.
//!
//! Every network operation runs as a spawned task with a `TaskStarted` /
//! `TaskCompleted` envelope. The per-kind `TaskState` lets the reducer drop
//! completions that no longer match the active task (stale results after a
//! cancel or a newer request) and cancel in-flight work when the owning view
//! goes away.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Probe,
    AuthRestore,
    Login,
    ThemeInit,
    Users,
    Portfolio,
    BlogDetail,
    PostDetail,
    MyPosts,
    PostCreate,
    PostDelete,
    CommentCreate,
    CommentDelete,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    /// Cancels and forgets the active task; a late completion will then fail
    /// `finish_if_active` and be dropped.
    pub fn cancel_active(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub probe: TaskState,
    pub auth_restore: TaskState,
    pub login: TaskState,
    pub theme_init: TaskState,
    pub users: TaskState,
    pub portfolio: TaskState,
    pub blog_detail: TaskState,
    pub post_detail: TaskState,
    pub my_posts: TaskState,
    pub post_create: TaskState,
    pub post_delete: TaskState,
    pub comment_create: TaskState,
    pub comment_delete: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Probe => &self.probe,
            TaskKind::AuthRestore => &self.auth_restore,
            TaskKind::Login => &self.login,
            TaskKind::ThemeInit => &self.theme_init,
            TaskKind::Users => &self.users,
            TaskKind::Portfolio => &self.portfolio,
            TaskKind::BlogDetail => &self.blog_detail,
            TaskKind::PostDetail => &self.post_detail,
            TaskKind::MyPosts => &self.my_posts,
            TaskKind::PostCreate => &self.post_create,
            TaskKind::PostDelete => &self.post_delete,
            TaskKind::CommentCreate => &self.comment_create,
            TaskKind::CommentDelete => &self.comment_delete,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Probe => &mut self.probe,
            TaskKind::AuthRestore => &mut self.auth_restore,
            TaskKind::Login => &mut self.login,
            TaskKind::ThemeInit => &mut self.theme_init,
            TaskKind::Users => &mut self.users,
            TaskKind::Portfolio => &mut self.portfolio,
            TaskKind::BlogDetail => &mut self.blog_detail,
            TaskKind::PostDetail => &mut self.post_detail,
            TaskKind::MyPosts => &mut self.my_posts,
            TaskKind::PostCreate => &mut self.post_create,
            TaskKind::PostDelete => &mut self.post_delete,
            TaskKind::CommentCreate => &mut self.comment_create,
            TaskKind::CommentDelete => &mut self.comment_delete,
        }
    }

    pub fn is_any_running(&self) -> bool {
        [
            &self.probe,
            &self.auth_restore,
            &self.login,
            &self.theme_init,
            &self.users,
            &self.portfolio,
            &self.blog_detail,
            &self.post_detail,
            &self.my_posts,
            &self.post_create,
            &self.post_delete,
            &self.comment_create,
            &self.comment_delete,
        ]
        .iter()
        .any(|state| state.is_running())
    }
}
