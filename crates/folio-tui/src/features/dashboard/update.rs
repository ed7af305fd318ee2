//! Dashboard reducer: post listing keys, the new-post editor, and results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::api::types::Post;

use crate::common::Loadable;
use crate::effects::UiEffect;
use crate::features::auth::AuthState;
use crate::features::dashboard::state::{DashboardState, NewPostForm, Notice, PostField};
use crate::features::home::state::HomeState;
use crate::features::nav::{NavState, Page};
use crate::features::{auth, home};
use crate::overlays::OverlayRequest;

/// Handles a key on the dashboard.
///
/// Logout is handled here too: it transitions the session locally first and
/// lets the standing page correction move us off the dashboard.
pub fn handle_key(
    nav: &mut NavState,
    dashboard: &mut DashboardState,
    home_state: &mut HomeState,
    auth_state: &mut AuthState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    if dashboard.form.is_some() {
        return (handle_form_key(dashboard, key), None);
    }

    match key.code {
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') => (vec![], Some(OverlayRequest::ThemePicker)),
        KeyCode::Char('h') | KeyCode::Esc => {
            nav.go_to(Page::Home);
            (home::update::mount_listing(home_state), None)
        }
        KeyCode::Char('l') => (auth::update::logout(auth_state), None),
        KeyCode::Char('n') => {
            dashboard.form = Some(NewPostForm::new());
            dashboard.error = None;
            (vec![], None)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            dashboard.cursor = dashboard.cursor.saturating_sub(1);
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = dashboard.posts.ready().map_or(0, Vec::len);
            dashboard.cursor = (dashboard.cursor + 1).min(len.saturating_sub(1));
            (vec![], None)
        }
        KeyCode::Char('d') => {
            let request = dashboard
                .selected_post()
                .map(|post| OverlayRequest::ConfirmDeletePost {
                    post_id: post.id.clone(),
                });
            (vec![], request)
        }
        _ => (vec![], None),
    }
}

fn handle_form_key(dashboard: &mut DashboardState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(form) = &mut dashboard.form else {
        return vec![];
    };
    if form.saving {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            dashboard.form = None;
            vec![]
        }
        KeyCode::Char('s') if ctrl => submit_form(form),
        KeyCode::Tab => {
            form.toggle_focus();
            vec![]
        }
        // Enter in the title hops to the content; in the content it is a
        // newline handled by the field itself.
        KeyCode::Enter if form.focus == PostField::Title => {
            form.focus = PostField::Content;
            vec![]
        }
        _ => {
            form.focused_field().handle_key(key);
            vec![]
        }
    }
}

/// Validates the editor and starts the create. Empty fields never reach the
/// network.
fn submit_form(form: &mut NewPostForm) -> Vec<UiEffect> {
    if form.title.is_empty() || form.content.is_empty() {
        form.error = Some("Title and content are required".to_string());
        return vec![];
    }
    form.saving = true;
    form.error = None;
    vec![UiEffect::CreatePost {
        title: form.title.value().trim().to_string(),
        content: form.content.value().trim().to_string(),
    }]
}

// ============================================================================
// Data results
// ============================================================================

pub fn apply_my_posts(dashboard: &mut DashboardState, result: Result<Vec<Post>, String>) {
    dashboard.posts = match result {
        Ok(posts) => Loadable::Ready(posts),
        Err(message) => Loadable::Failed(message),
    };
    dashboard.cursor = 0;
}

/// A successful create prepends the stored post; a failure keeps the draft
/// and renders the message in the editor. Nothing is applied before the
/// backend confirms.
pub fn apply_post_created(dashboard: &mut DashboardState, result: Result<Post, String>) {
    match result {
        Ok(post) => {
            if let Loadable::Ready(posts) = &mut dashboard.posts {
                posts.insert(0, post);
            }
            dashboard.form = None;
            dashboard.cursor = 0;
            dashboard.notice = Some(Notice::new("Post published"));
        }
        Err(message) => {
            if let Some(form) = &mut dashboard.form {
                form.saving = false;
                form.error = Some(message);
            }
        }
    }
}

/// A confirmed delete removes the row; a failed one leaves the list intact
/// and surfaces the message.
pub fn apply_post_deleted(
    dashboard: &mut DashboardState,
    post_id: &str,
    result: Result<(), String>,
) {
    match result {
        Ok(()) => {
            if let Loadable::Ready(posts) = &mut dashboard.posts {
                posts.retain(|post| post.id != post_id);
                dashboard.cursor = dashboard.cursor.min(posts.len().saturating_sub(1));
            }
            dashboard.error = None;
            dashboard.notice = Some(Notice::new("Post deleted"));
        }
        Err(message) => {
            dashboard.error = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("post {id}"),
            content: "text".to_string(),
            author: None,
            blog_title: None,
            created_at: Utc::now(),
            comment_count: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn empty_form_is_rejected_before_any_network_call() {
        let mut form = NewPostForm::new();
        let effects = submit_form(&mut form);
        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Title and content are required"));
        assert!(!form.saving);
    }

    #[test]
    fn filled_form_emits_create_effect() {
        let mut form = NewPostForm::new();
        form.title.handle_paste("Hello");
        form.content.handle_paste("World");
        let effects = submit_form(&mut form);
        assert_eq!(
            effects,
            vec![UiEffect::CreatePost {
                title: "Hello".to_string(),
                content: "World".to_string(),
            }]
        );
        assert!(form.saving);
    }

    #[test]
    fn created_post_is_prepended() {
        let mut dashboard = DashboardState::loading();
        apply_my_posts(&mut dashboard, Ok(vec![post("old")]));
        dashboard.form = Some(NewPostForm::new());

        apply_post_created(&mut dashboard, Ok(post("new")));

        let posts = dashboard.posts.ready().unwrap();
        assert_eq!(posts[0].id, "new");
        assert_eq!(posts.len(), 2);
        assert!(dashboard.form.is_none());
        assert!(dashboard.notice.is_some());
    }

    #[test]
    fn failed_create_keeps_the_draft() {
        let mut dashboard = DashboardState::loading();
        apply_my_posts(&mut dashboard, Ok(vec![]));
        let mut form = NewPostForm::new();
        form.title.handle_paste("Hello");
        form.saving = true;
        dashboard.form = Some(form);

        apply_post_created(&mut dashboard, Err("boom".to_string()));

        let form = dashboard.form.as_ref().unwrap();
        assert_eq!(form.title.value(), "Hello");
        assert_eq!(form.error.as_deref(), Some("boom"));
        assert!(!form.saving);
        assert!(dashboard.posts.ready().unwrap().is_empty());
    }

    #[test]
    fn failed_delete_leaves_the_list_intact() {
        let mut dashboard = DashboardState::loading();
        apply_my_posts(&mut dashboard, Ok(vec![post("p1"), post("p2")]));

        apply_post_deleted(&mut dashboard, "p1", Err("denied".to_string()));

        assert_eq!(dashboard.posts.ready().unwrap().len(), 2);
        assert_eq!(dashboard.error.as_deref(), Some("denied"));
    }

    #[test]
    fn confirmed_delete_removes_the_row() {
        let mut dashboard = DashboardState::loading();
        apply_my_posts(&mut dashboard, Ok(vec![post("p1"), post("p2")]));
        dashboard.cursor = 1;

        apply_post_deleted(&mut dashboard, "p2", Ok(()));

        let posts = dashboard.posts.ready().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(dashboard.cursor, 0);
    }

    #[test]
    fn enter_in_title_moves_focus_to_content() {
        let mut dashboard = DashboardState::loading();
        dashboard.form = Some(NewPostForm::new());

        handle_form_key(&mut dashboard, key(KeyCode::Enter));

        assert_eq!(
            dashboard.form.as_ref().unwrap().focus,
            PostField::Content
        );
    }
}
