//! Overlay modules for the TUI.
//!
//! Overlays are modal components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function; handlers
//! return an `OverlayOutcome` that the reducer interprets, so overlays never
//! mutate application state themselves.

pub mod confirm;
pub mod render_utils;
pub mod theme_picker;

pub use confirm::{ConfirmAction, ConfirmState};
use crossterm::event::KeyEvent;
use folio_core::theme::ThemeColors;
pub use theme_picker::ThemePickerState;

/// The active overlay, if any.
#[derive(Debug, Clone)]
pub enum Overlay {
    ThemePicker(ThemePickerState),
    Confirm(ConfirmState),
}

/// Requests to open a new overlay, returned by page key handlers.
#[derive(Debug, Clone)]
pub enum OverlayRequest {
    ThemePicker,
    ConfirmDeletePost {
        post_id: String,
    },
    ConfirmDeleteComment {
        post_id: String,
        comment_id: String,
    },
}

/// What an overlay key handler asks the reducer to do.
#[derive(Debug, Clone)]
pub enum OverlayOutcome {
    Stay,
    Close,
    ChoosePalette(String),
    ChooseCustom(ThemeColors),
    Confirmed(ConfirmAction),
}

/// Routes a key to the active overlay. `None` means no overlay is open and
/// the key should fall through to the page.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> Option<OverlayOutcome> {
    let active = overlay.as_mut()?;
    Some(match active {
        Overlay::ThemePicker(state) => state.handle_key(key),
        Overlay::Confirm(state) => state.handle_key(key),
    })
}
