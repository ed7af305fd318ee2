//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! After every event the page-gating invariant is re-checked: the login and
//! dashboard pages follow the auth flag no matter which event moved it. That
//! is the explicit subscription between the session machine and the router —
//! nothing relies on render ordering.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::probe::ProbePhase;

use crate::effects::UiEffect;
use crate::events::{DataEvent, UiEvent};
use crate::features::auth::{AuthState, LoginFormState};
use crate::features::dashboard::DashboardState;
use crate::features::nav::{HomeView, Page};
use crate::features::{auth, dashboard, home, theme};
use crate::overlays::{
    self, ConfirmAction, ConfirmState, Overlay, OverlayOutcome, OverlayRequest, ThemePickerState,
};
use crate::state::AppState;
use crate::common::TaskKind;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = dispatch(app, event);

    // Standing invariant, enforced reactively after every event.
    if app.tui.nav.on_auth_changed(app.tui.auth.is_authenticated()) {
        effects.extend(mount_corrected_page(app));
    }

    effects
}

fn dispatch(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            // The waking threshold is a soft timer checked on the tick.
            app.tui.probe.tick();
            app.tui.dashboard.tick();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app
                .tui
                .tasks
                .state_mut(kind)
                .finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                // A stale or cancelled task; its result must not land.
                vec![]
            }
        }
        UiEvent::ProbeFinished(result) => {
            app.tui.probe.finish(result);
            if app.tui.probe.is_ready() {
                // The probe gates everything: only now does the session
                // restore (and, after it, theme resolution) begin.
                vec![UiEffect::RestoreSession]
            } else {
                vec![]
            }
        }
        UiEvent::SessionRestored(identity) => {
            app.tui.auth = match identity {
                Some(identity) => AuthState::Authenticated(identity),
                None => AuthState::Anonymous,
            };
            // Theme resolution is keyed by the resolved identity, so it only
            // starts once restore has settled.
            vec![UiEffect::InitTheme {
                identity: app.tui.auth.identity().cloned(),
            }]
        }
        UiEvent::LoginFinished(result) => {
            auth::update::handle_login_result(&mut app.tui.auth, &mut app.tui.login, result);
            vec![]
        }
        UiEvent::ThemeResolved(selection) => {
            app.tui.theme.apply(selection);
            // Startup is complete; mount the initial page.
            home::update::mount_listing(&mut app.tui.home)
        }
        UiEvent::Data(data) => handle_data_event(app, data),
    }
}

fn handle_data_event(app: &mut AppState, data: DataEvent) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    match data {
        DataEvent::Cancelled => vec![],
        DataEvent::UsersLoaded(result) => {
            home::update::apply_users(&mut tui.home, result);
            vec![]
        }
        DataEvent::PortfolioLoaded { user_id, result } => {
            home::update::apply_portfolio(&tui.nav, &mut tui.home, user_id, result);
            vec![]
        }
        DataEvent::BlogLoaded { blog_id, result } => {
            home::update::apply_blog(&tui.nav, &mut tui.home, &blog_id, result);
            vec![]
        }
        DataEvent::PostLoaded { post_id, result } => {
            home::update::apply_post(&tui.nav, &mut tui.home, &post_id, result);
            vec![]
        }
        DataEvent::MyPostsLoaded(result) => {
            dashboard::update::apply_my_posts(&mut tui.dashboard, result);
            vec![]
        }
        DataEvent::PostCreated(result) => {
            dashboard::update::apply_post_created(&mut tui.dashboard, result);
            vec![]
        }
        DataEvent::PostDeleted { post_id, result } => {
            dashboard::update::apply_post_deleted(&mut tui.dashboard, &post_id, result);
            vec![]
        }
        DataEvent::CommentCreated { post_id, result } => {
            home::update::apply_comment_created(&tui.nav, &mut tui.home, &post_id, result)
        }
        DataEvent::CommentDeleted { post_id, result } => {
            home::update::apply_comment_deleted(&tui.nav, &mut tui.home, &post_id, result)
        }
    }
}

/// Mounts whatever page the reactive correction just forced.
fn mount_corrected_page(app: &mut AppState) -> Vec<UiEffect> {
    match app.tui.nav.page {
        Page::Dashboard => {
            app.tui.dashboard = DashboardState::loading();
            vec![UiEffect::LoadMyPosts]
        }
        Page::Login => {
            // Leaving the dashboard mid-fetch: drop the in-flight request.
            app.tui.login = LoginFormState::new();
            vec![UiEffect::CancelTask {
                kind: TaskKind::MyPosts,
            }]
        }
        Page::Home => vec![],
    }
}

// ============================================================================
// Terminal events
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // An open overlay owns the keyboard.
    if let Some(outcome) = overlays::handle_overlay_key(&mut app.overlay, key) {
        return apply_overlay_outcome(app, outcome);
    }

    // The probe gates the rest of the UI: nothing else is mounted until the
    // backend answers.
    if !app.tui.probe.is_ready() {
        return handle_probe_key(app, key);
    }

    let (effects, overlay_request) = match app.tui.nav.page {
        Page::Home => home::update::handle_key(
            &mut app.tui.nav,
            &mut app.tui.home,
            &app.tui.auth,
            key,
        ),
        Page::Dashboard => dashboard::update::handle_key(
            &mut app.tui.nav,
            &mut app.tui.dashboard,
            &mut app.tui.home,
            &mut app.tui.auth,
            key,
        ),
        Page::Login => handle_login_page_key(app, key),
    };

    if let Some(request) = overlay_request {
        if app.overlay.is_none() {
            open_overlay_request(app, request);
        }
    }

    effects
}

fn handle_login_page_key(app: &mut AppState, key: KeyEvent) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    if key.code == KeyCode::Esc {
        app.tui.nav.go_to(Page::Home);
        return (home::update::mount_listing(&mut app.tui.home), None);
    }
    (
        auth::update::handle_key(&mut app.tui.auth, &mut app.tui.login, key),
        None,
    )
}

fn handle_probe_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match (&app.tui.probe, key.code) {
        (_, KeyCode::Char('q')) => vec![UiEffect::Quit],
        // Retry is user-initiated and only from the failed state, so a
        // pending probe never gets a duplicate request.
        (ProbePhase::Failed(_), KeyCode::Char('r')) => {
            app.tui.probe = ProbePhase::start();
            vec![UiEffect::Probe]
        }
        _ => vec![],
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    // Route pasted text to whichever field owns the keyboard right now.
    if let Some(Overlay::ThemePicker(picker)) = &mut app.overlay {
        if let Some(field) = &mut picker.custom {
            field.handle_paste(text);
        }
        return;
    }
    if app.overlay.is_some() {
        return;
    }
    match app.tui.nav.page {
        Page::Login => {
            app.tui.login.focused_field().handle_paste(text);
        }
        Page::Dashboard => {
            if let Some(form) = &mut app.tui.dashboard.form {
                if !form.saving {
                    form.focused_field().handle_paste(text);
                }
            }
        }
        Page::Home => match app.tui.nav.home_view() {
            HomeView::Blog(_) => {
                if let Some(pane) = &mut app.tui.home.blog {
                    if pane.filtering {
                        pane.filter.handle_paste(text);
                    }
                }
            }
            HomeView::Post(_) => {
                if let Some(pane) = &mut app.tui.home.post {
                    if pane.composing && !pane.submitting {
                        pane.comment.handle_paste(text);
                    }
                }
            }
            _ => {}
        },
    }
}

// ============================================================================
// Overlays
// ============================================================================

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) {
    app.overlay = Some(match request {
        OverlayRequest::ThemePicker => Overlay::ThemePicker(ThemePickerState::open(
            &app.tui.theme.selection.palette.id,
        )),
        OverlayRequest::ConfirmDeletePost { post_id } => {
            Overlay::Confirm(ConfirmState::delete_post(post_id))
        }
        OverlayRequest::ConfirmDeleteComment {
            post_id,
            comment_id,
        } => Overlay::Confirm(ConfirmState::delete_comment(post_id, comment_id)),
    });
}

fn apply_overlay_outcome(app: &mut AppState, outcome: OverlayOutcome) -> Vec<UiEffect> {
    match outcome {
        OverlayOutcome::Stay => vec![],
        OverlayOutcome::Close => {
            app.overlay = None;
            vec![]
        }
        OverlayOutcome::ChoosePalette(id) => {
            app.overlay = None;
            theme::update::choose_palette(&mut app.tui.theme, &app.tui.auth, &id)
        }
        OverlayOutcome::ChooseCustom(colors) => {
            app.overlay = None;
            theme::update::choose_custom(&mut app.tui.theme, &app.tui.auth, colors)
        }
        OverlayOutcome::Confirmed(action) => {
            app.overlay = None;
            match action {
                ConfirmAction::DeletePost { post_id } => {
                    vec![UiEffect::DeletePost { post_id }]
                }
                ConfirmAction::DeleteComment {
                    post_id,
                    comment_id,
                } => vec![UiEffect::DeleteComment {
                    post_id,
                    comment_id,
                }],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::api::types::Identity;
    use folio_core::config::Config;
    use folio_core::session::theme::ThemeSelection;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn ready_app() -> AppState {
        let mut app = app();
        app.tui.probe.finish(Ok(()));
        app
    }

    fn identity() -> Identity {
        Identity {
            id: 7,
            email: "laura@example.com".to_string(),
        }
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    #[test]
    fn probe_success_chains_session_restore_then_theme_init() {
        let mut app = app();

        let effects = update(&mut app, UiEvent::ProbeFinished(Ok(())));
        assert_eq!(effects, vec![UiEffect::RestoreSession]);

        let effects = update(&mut app, UiEvent::SessionRestored(Some(identity())));
        assert_eq!(
            effects,
            vec![UiEffect::InitTheme {
                identity: Some(identity())
            }]
        );

        let effects = update(
            &mut app,
            UiEvent::ThemeResolved(ThemeSelection::default_selection()),
        );
        assert_eq!(effects, vec![UiEffect::LoadUsers]);
    }

    #[test]
    fn probe_failure_issues_no_downstream_work() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::ProbeFinished(Err("connection refused".to_string())),
        );
        assert!(effects.is_empty());
        assert!(matches!(app.tui.probe, ProbePhase::Failed(_)));
    }

    #[test]
    fn probe_retry_only_from_failed_state() {
        let mut app = app();
        // Pending probe: r does nothing (no duplicate request).
        assert!(press(&mut app, KeyCode::Char('r')).is_empty());

        update(
            &mut app,
            UiEvent::ProbeFinished(Err("connection refused".to_string())),
        );
        let effects = press(&mut app, KeyCode::Char('r'));
        assert_eq!(effects, vec![UiEffect::Probe]);
        assert!(app.tui.probe.is_pending());
    }

    #[test]
    fn go_to_login_while_authenticated_lands_on_dashboard() {
        let mut app = ready_app();
        app.tui.auth = AuthState::Authenticated(identity());

        // 'l' on the home listing navigates to login; the standing
        // correction forces dashboard before anything renders.
        let effects = press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.tui.nav.page, Page::Dashboard);
        assert!(effects.contains(&UiEffect::LoadMyPosts));
    }

    #[test]
    fn logout_on_dashboard_forces_login_page() {
        let mut app = ready_app();
        app.tui.auth = AuthState::Authenticated(identity());
        press(&mut app, KeyCode::Char('l')); // corrected onto the dashboard

        let effects = press(&mut app, KeyCode::Char('l')); // logout
        assert_eq!(app.tui.nav.page, Page::Login);
        assert!(!app.tui.auth.is_authenticated());
        assert!(effects.contains(&UiEffect::NotifyLogout));
        assert!(effects.contains(&UiEffect::CancelTask {
            kind: TaskKind::MyPosts
        }));
    }

    #[test]
    fn logout_while_parked_on_login_stays_there() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('l')); // anonymous: straight to login
        assert_eq!(app.tui.nav.page, Page::Login);

        update(&mut app, UiEvent::SessionRestored(None));
        assert_eq!(app.tui.nav.page, Page::Login);
    }

    #[test]
    fn successful_login_is_corrected_onto_the_dashboard() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.tui.nav.page, Page::Login);

        let effects = update(&mut app, UiEvent::LoginFinished(Ok(identity())));
        assert_eq!(app.tui.nav.page, Page::Dashboard);
        assert!(effects.contains(&UiEffect::LoadMyPosts));
    }

    #[test]
    fn failed_login_stays_on_login_with_cleared_password() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('l'));
        app.tui.login.password.handle_paste("hunter2");

        let effects = update(
            &mut app,
            UiEvent::LoginFinished(Err("Invalid email or password".to_string())),
        );
        assert!(effects.is_empty());
        assert_eq!(app.tui.nav.page, Page::Login);
        assert_eq!(app.tui.auth.error(), Some("Invalid email or password"));
        assert!(app.tui.login.password.is_empty());
    }

    #[test]
    fn stale_task_completion_is_dropped() {
        let mut app = ready_app();
        let first = app.tui.task_seq.next_id();
        let second = app.tui.task_seq.next_id();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Users,
                started: TaskStarted {
                    id: second,
                    cancel: None,
                },
            },
        );

        // A completion from a superseded task never reaches the state.
        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Users,
                completed: TaskCompleted {
                    id: first,
                    result: Box::new(UiEvent::Data(DataEvent::UsersLoaded(Ok(vec![])))),
                },
            },
        );
        assert!(effects.is_empty());
        assert!(app.tui.home.users.users.is_loading());
    }

    #[test]
    fn theme_pick_persists_and_unknown_id_is_noop() {
        let mut app = ready_app();
        let effects =
            theme::update::choose_palette(&mut app.tui.theme, &app.tui.auth, "midnight");
        assert_eq!(app.tui.theme.selection.palette.id, "midnight");
        assert!(effects.contains(&UiEffect::PersistTheme {
            id: "midnight".to_string()
        }));

        let before = app.tui.theme.selection.clone();
        let effects = theme::update::choose_palette(&mut app.tui.theme, &app.tui.auth, "nope");
        assert!(effects.is_empty());
        assert_eq!(app.tui.theme.selection, before);
    }
}
