//! Home feature reducer: navigation keys, pane mounting, and data results.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::api::types::{Blog, Comment, Post, User};

use crate::common::{Loadable, TaskKind};
use crate::effects::UiEffect;
use crate::features::auth::AuthState;
use crate::features::home::state::{
    can_delete_comment, BlogPane, HomeState, PortfolioPane, PostPane, UsersPane,
};
use crate::features::nav::{HomeView, NavState, Page};
use crate::overlays::OverlayRequest;

// ============================================================================
// Mounting (re-fetch-on-mount)
// ============================================================================

/// Mounts the top-level listing, dropping every detail pane.
pub fn mount_listing(home: &mut HomeState) -> Vec<UiEffect> {
    home.users = UsersPane::loading();
    home.portfolio = None;
    home.blog = None;
    home.post = None;
    vec![UiEffect::LoadUsers]
}

pub fn mount_portfolio(home: &mut HomeState, user_id: i64) -> Vec<UiEffect> {
    home.portfolio = Some(PortfolioPane::loading(user_id));
    home.blog = None;
    home.post = None;
    vec![UiEffect::LoadPortfolio { user_id }]
}

pub fn mount_blog(home: &mut HomeState, blog_id: String) -> Vec<UiEffect> {
    home.blog = Some(BlogPane::loading(blog_id.clone()));
    home.post = None;
    vec![UiEffect::LoadBlog { blog_id }]
}

pub fn mount_post(home: &mut HomeState, post_id: String) -> Vec<UiEffect> {
    home.post = Some(PostPane::loading(post_id.clone()));
    vec![UiEffect::LoadPost { post_id }]
}

// ============================================================================
// Key handling
// ============================================================================

/// Handles a key on the home page.
pub fn handle_key(
    nav: &mut NavState,
    home: &mut HomeState,
    auth: &AuthState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match nav.home_view() {
        HomeView::Listing => handle_listing_key(nav, home, key),
        HomeView::User(_) => handle_portfolio_key(nav, home, key),
        HomeView::Blog(_) => handle_blog_key(nav, home, key),
        HomeView::Post(_) => handle_post_key(nav, home, auth, key),
    }
}

fn handle_listing_key(
    nav: &mut NavState,
    home: &mut HomeState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') => (vec![], Some(OverlayRequest::ThemePicker)),
        KeyCode::Char('l') => {
            nav.go_to(Page::Login);
            (vec![], None)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            home.users.cursor = home.users.cursor.saturating_sub(1);
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = home.users.users.ready().map_or(0, Vec::len);
            home.users.cursor = (home.users.cursor + 1).min(len.saturating_sub(1));
            (vec![], None)
        }
        KeyCode::Enter => {
            let Some(user) = home.users.selected() else {
                return (vec![], None);
            };
            let user_id = user.id;
            nav.select_user(user_id);
            (mount_portfolio(home, user_id), None)
        }
        _ => (vec![], None),
    }
}

fn handle_portfolio_key(
    nav: &mut NavState,
    home: &mut HomeState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') => (vec![], Some(OverlayRequest::ThemePicker)),
        KeyCode::Esc | KeyCode::Backspace => (back_to_listing(nav, home), None),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(pane) = &mut home.portfolio {
                pane.cursor = pane.cursor.saturating_sub(1);
            }
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(pane) = &mut home.portfolio {
                let len = pane.data.ready().map_or(0, |(_, blogs)| blogs.len());
                pane.cursor = (pane.cursor + 1).min(len.saturating_sub(1));
            }
            (vec![], None)
        }
        KeyCode::Enter => {
            let Some(blog_id) = home
                .portfolio
                .as_ref()
                .and_then(PortfolioPane::selected_blog)
                .map(|blog| blog.id.clone())
            else {
                return (vec![], None);
            };
            nav.select_blog(blog_id.clone());
            (mount_blog(home, blog_id), None)
        }
        _ => (vec![], None),
    }
}

fn handle_blog_key(
    nav: &mut NavState,
    home: &mut HomeState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    // Filter entry mode routes keys to the filter field until Enter/Esc.
    if home.blog.as_ref().is_some_and(|pane| pane.filtering) {
        if let Some(pane) = &mut home.blog {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => pane.filtering = false,
                _ => {
                    if pane.filter.handle_key(key) {
                        pane.cursor = 0;
                    }
                }
            }
        }
        return (vec![], None);
    }

    match key.code {
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') => (vec![], Some(OverlayRequest::ThemePicker)),
        KeyCode::Char('/') => {
            if let Some(pane) = &mut home.blog {
                pane.filtering = true;
            }
            (vec![], None)
        }
        KeyCode::Esc | KeyCode::Backspace => (back_to_portfolio(nav, home), None),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(pane) = &mut home.blog {
                pane.cursor = pane.cursor.saturating_sub(1);
            }
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(pane) = &mut home.blog {
                let len = pane.visible_posts().len();
                pane.cursor = (pane.cursor + 1).min(len.saturating_sub(1));
            }
            (vec![], None)
        }
        KeyCode::Enter => {
            let Some(post_id) = home.blog.as_ref().and_then(BlogPane::selected_post_id) else {
                return (vec![], None);
            };
            nav.select_post(post_id.clone());
            (mount_post(home, post_id), None)
        }
        _ => (vec![], None),
    }
}

fn handle_post_key(
    nav: &mut NavState,
    home: &mut HomeState,
    auth: &AuthState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    // Comment composer mode.
    if home.post.as_ref().is_some_and(|pane| pane.composing) {
        let Some(pane) = &mut home.post else {
            return (vec![], None);
        };
        if pane.submitting {
            return (vec![], None);
        }
        match key.code {
            KeyCode::Esc => {
                pane.composing = false;
                pane.error = None;
            }
            KeyCode::Enter => {
                if pane.comment.is_empty() {
                    pane.error = Some("A comment needs some text".to_string());
                } else {
                    pane.submitting = true;
                    pane.error = None;
                    return (
                        vec![UiEffect::CreateComment {
                            post_id: pane.post_id.clone(),
                            content: pane.comment.value().trim().to_string(),
                        }],
                        None,
                    );
                }
            }
            _ => {
                pane.comment.handle_key(key);
            }
        }
        return (vec![], None);
    }

    match key.code {
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') => (vec![], Some(OverlayRequest::ThemePicker)),
        KeyCode::Esc | KeyCode::Backspace => (back_to_blog(nav, home), None),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(pane) = &mut home.post {
                pane.cursor = pane.cursor.saturating_sub(1);
            }
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(pane) = &mut home.post {
                let len = pane.data.ready().map_or(0, |(_, comments)| comments.len());
                pane.cursor = (pane.cursor + 1).min(len.saturating_sub(1));
            }
            (vec![], None)
        }
        // Composing is gated on a session; anonymous viewers see a hint
        // instead of a composer.
        KeyCode::Char('c') if auth.is_authenticated() => {
            if let Some(pane) = &mut home.post {
                pane.composing = true;
            }
            (vec![], None)
        }
        // The delete control exists only for the comment's author.
        KeyCode::Char('d') => {
            let request = home.post.as_ref().and_then(|pane| {
                let comment = pane.selected_comment()?;
                can_delete_comment(auth.identity(), comment).then(|| {
                    OverlayRequest::ConfirmDeleteComment {
                        post_id: pane.post_id.clone(),
                        comment_id: comment.id.clone(),
                    }
                })
            });
            (vec![], request)
        }
        _ => (vec![], None),
    }
}

// ============================================================================
// Back navigation (one level per step, cancelling the departed pane's fetch)
// ============================================================================

fn back_to_listing(nav: &mut NavState, home: &mut HomeState) -> Vec<UiEffect> {
    nav.back();
    let mut effects = vec![UiEffect::CancelTask {
        kind: TaskKind::Portfolio,
    }];
    effects.extend(mount_listing(home));
    effects
}

fn back_to_portfolio(nav: &mut NavState, home: &mut HomeState) -> Vec<UiEffect> {
    nav.back();
    home.blog = None;
    home.post = None;
    let mut effects = vec![UiEffect::CancelTask {
        kind: TaskKind::BlogDetail,
    }];
    let Some(user_id) = nav.selected_user else {
        return effects;
    };
    effects.extend(mount_portfolio(home, user_id));
    effects
}

fn back_to_blog(nav: &mut NavState, home: &mut HomeState) -> Vec<UiEffect> {
    nav.back();
    home.post = None;
    let mut effects = vec![UiEffect::CancelTask {
        kind: TaskKind::PostDetail,
    }];
    let Some(blog_id) = nav.selected_blog.clone() else {
        return effects;
    };
    effects.extend(mount_blog(home, blog_id));
    effects
}

// ============================================================================
// Data results
// ============================================================================

pub fn apply_users(home: &mut HomeState, result: Result<Vec<User>, String>) {
    home.users.users = match result {
        Ok(users) => Loadable::Ready(users),
        Err(message) => Loadable::Failed(message),
    };
    home.users.cursor = 0;
}

/// Applies a portfolio result iff that user is still selected.
pub fn apply_portfolio(
    nav: &NavState,
    home: &mut HomeState,
    user_id: i64,
    result: Result<(User, Vec<Blog>), String>,
) {
    if nav.selected_user != Some(user_id) {
        return;
    }
    let Some(pane) = home.portfolio.as_mut().filter(|pane| pane.user_id == user_id) else {
        return;
    };
    pane.data = match result {
        Ok(data) => Loadable::Ready(data),
        Err(message) => Loadable::Failed(message),
    };
    pane.cursor = 0;
}

pub fn apply_blog(
    nav: &NavState,
    home: &mut HomeState,
    blog_id: &str,
    result: Result<(Blog, Vec<Post>), String>,
) {
    if nav.selected_blog.as_deref() != Some(blog_id) {
        return;
    }
    let Some(pane) = home.blog.as_mut().filter(|pane| pane.blog_id == blog_id) else {
        return;
    };
    pane.data = match result {
        Ok(data) => Loadable::Ready(data),
        Err(message) => Loadable::Failed(message),
    };
    pane.cursor = 0;
}

pub fn apply_post(
    nav: &NavState,
    home: &mut HomeState,
    post_id: &str,
    result: Result<(Post, Vec<Comment>), String>,
) {
    if nav.selected_post.as_deref() != Some(post_id) {
        return;
    }
    let Some(pane) = home.post.as_mut().filter(|pane| pane.post_id == post_id) else {
        return;
    };
    pane.data = match result {
        Ok(data) => Loadable::Ready(data),
        Err(message) => Loadable::Failed(message),
    };
    pane.cursor = 0;
}

/// After a comment create settles: on success the composer resets and the
/// post view re-fetches; on failure the draft stays and the message renders
/// inline. Nothing was applied optimistically either way.
pub fn apply_comment_created(
    nav: &NavState,
    home: &mut HomeState,
    post_id: &str,
    result: Result<(), String>,
) -> Vec<UiEffect> {
    let Some(pane) = home.post.as_mut().filter(|pane| pane.post_id == post_id) else {
        return vec![];
    };
    pane.submitting = false;
    match result {
        Ok(()) => {
            pane.comment.clear();
            pane.composing = false;
            pane.error = None;
            if nav.selected_post.as_deref() == Some(post_id) {
                return vec![UiEffect::LoadPost {
                    post_id: post_id.to_string(),
                }];
            }
            vec![]
        }
        Err(message) => {
            pane.error = Some(message);
            vec![]
        }
    }
}

/// After a comment delete settles: success re-fetches, failure renders
/// inline; the comment list is untouched until the backend confirms.
pub fn apply_comment_deleted(
    nav: &NavState,
    home: &mut HomeState,
    post_id: &str,
    result: Result<(), String>,
) -> Vec<UiEffect> {
    let Some(pane) = home.post.as_mut().filter(|pane| pane.post_id == post_id) else {
        return vec![];
    };
    match result {
        Ok(()) => {
            pane.error = None;
            if nav.selected_post.as_deref() == Some(post_id) {
                return vec![UiEffect::LoadPost {
                    post_id: post_id.to_string(),
                }];
            }
            vec![]
        }
        Err(message) => {
            pane.error = Some(message);
            vec![]
        }
    }
}
