//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Spawned handlers send `UiEvent`s to `inbox_tx`; the loop drains
//! `inbox_rx` each frame. Network tasks go through `spawn_task`, which wraps
//! them in the `TaskStarted`/`TaskCompleted` lifecycle so stale results can
//! be dropped by the reducer.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::api::ApiClient;
use folio_core::config::Config;
use folio_core::prefs::PrefsStore;
use folio_core::session::{auth as auth_session, theme as theme_session};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while something is in flight (~60fps).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing is
/// happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: Arc<ApiClient>,
    prefs: PrefsStore,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: Config, api: ApiClient, prefs: PrefsStore) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api: Arc::new(api),
            prefs,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        // The probe is the first and only request until the backend answers.
        self.execute_effect(UiEffect::Probe);

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers a render; other events batch to the
                // next tick, which caps the frame rate at the tick cadence.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while requests are in flight keeps spinners and the
        // waking timer honest; otherwise slow polling saves CPU.
        let needs_fast_poll =
            self.state.tui.probe.is_pending() || self.state.tui.tasks.is_any_running();
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain the inbox: all async results arrive here.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        // Poll terminal input until the next tick is due (or immediately if
        // there is already work to process).
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle.
    fn spawn_task<F, Fut>(&mut self, kind: TaskKind, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let id = self.state.tui.task_seq.next_id();
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        let api = Arc::clone(&self.api);
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // Startup / session
            UiEffect::Probe => {
                self.spawn_task(TaskKind::Probe, true, move |cancel| {
                    handlers::run_probe(api, cancel)
                });
            }
            UiEffect::RestoreSession => {
                self.spawn_task(TaskKind::AuthRestore, false, move |_| {
                    handlers::restore_session(api)
                });
            }
            UiEffect::Login { email, password } => {
                self.spawn_task(TaskKind::Login, false, move |_| {
                    handlers::login(api, email, password)
                });
            }
            UiEffect::NotifyLogout => {
                // Fire-and-forget: local logout already happened.
                tokio::spawn(async move {
                    auth_session::notify_logout(&api).await;
                });
            }

            // Theme
            UiEffect::InitTheme { identity } => {
                let prefs = self.prefs.clone();
                self.spawn_task(TaskKind::ThemeInit, false, move |_| {
                    handlers::init_theme(api, prefs, identity)
                });
            }
            UiEffect::PersistTheme { id } => {
                if let Err(err) = self.prefs.save_theme_id(&id) {
                    tracing::warn!("failed to persist theme preference: {err:#}");
                }
            }
            UiEffect::PersistCustomTheme { colors } => {
                if let Err(err) = self.prefs.save_custom_colors(&colors) {
                    tracing::warn!("failed to persist custom theme colors: {err:#}");
                }
            }
            UiEffect::SyncThemePreference => {
                // Best-effort: errors are logged inside, never surfaced.
                let Some(identity) = self.state.tui.auth.identity().cloned() else {
                    return;
                };
                let selection = self.state.tui.theme.selection.clone();
                tokio::spawn(async move {
                    theme_session::push_preference(&api, &identity, &selection).await;
                });
            }

            // Data fetches
            UiEffect::LoadUsers => {
                self.spawn_task(TaskKind::Users, true, move |cancel| {
                    handlers::load_users(api, cancel)
                });
            }
            UiEffect::LoadPortfolio { user_id } => {
                self.spawn_task(TaskKind::Portfolio, true, move |cancel| {
                    handlers::load_portfolio(api, user_id, cancel)
                });
            }
            UiEffect::LoadBlog { blog_id } => {
                self.spawn_task(TaskKind::BlogDetail, true, move |cancel| {
                    handlers::load_blog(api, blog_id, cancel)
                });
            }
            UiEffect::LoadPost { post_id } => {
                self.spawn_task(TaskKind::PostDetail, true, move |cancel| {
                    handlers::load_post(api, post_id, cancel)
                });
            }
            UiEffect::LoadMyPosts => {
                self.spawn_task(TaskKind::MyPosts, true, move |cancel| {
                    handlers::load_my_posts(api, cancel)
                });
            }

            // Mutations
            UiEffect::CreatePost { title, content } => {
                self.spawn_task(TaskKind::PostCreate, false, move |_| {
                    handlers::create_post(api, title, content)
                });
            }
            UiEffect::DeletePost { post_id } => {
                self.spawn_task(TaskKind::PostDelete, false, move |_| {
                    handlers::delete_post(api, post_id)
                });
            }
            UiEffect::CreateComment { post_id, content } => {
                self.spawn_task(TaskKind::CommentCreate, false, move |_| {
                    handlers::create_comment(api, post_id, content)
                });
            }
            UiEffect::DeleteComment {
                post_id,
                comment_id,
            } => {
                self.spawn_task(TaskKind::CommentDelete, false, move |_| {
                    handlers::delete_comment(api, post_id, comment_id)
                });
            }

            // Cancellation: forget the task so its completion is dropped.
            UiEffect::CancelTask { kind } => {
                self.state.tui.tasks.state_mut(kind).cancel_active();
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
