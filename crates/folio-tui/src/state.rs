//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── probe: ProbePhase        (startup gate)
//! │   ├── nav: NavState            (page + nested selection)
//! │   ├── auth: AuthState          (session machine)
//! │   ├── login: LoginFormState    (login page form)
//! │   ├── theme: ThemeState        (active palette + style table)
//! │   ├── home: HomeState          (browsing panes)
//! │   ├── dashboard: DashboardState
//! │   └── tasks: Tasks             (async task lifecycle)
//! └── overlay: Option<Overlay>     (modal overlays)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can hold `&mut self` and `&mut TuiState` at the same time.

use folio_core::config::Config;
use folio_core::probe::ProbePhase;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::{AuthState, LoginFormState};
use crate::features::dashboard::DashboardState;
use crate::features::home::HomeState;
use crate::features::nav::NavState;
use crate::features::theme::ThemeState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Startup availability probe; gates everything below it.
    pub probe: ProbePhase,
    pub nav: NavState,
    pub auth: AuthState,
    pub login: LoginFormState,
    pub theme: ThemeState,
    pub home: HomeState,
    pub dashboard: DashboardState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            probe: ProbePhase::start(),
            nav: NavState::default(),
            auth: AuthState::default(),
            login: LoginFormState::new(),
            theme: ThemeState::new(),
            home: HomeState::new(),
            dashboard: DashboardState::loading(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
