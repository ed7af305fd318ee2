//! Active theme state.

use folio_core::session::theme::ThemeSelection;

use crate::styles::Styles;

/// The active selection plus the derived style table.
///
/// `apply` is the single writer of `styles`; render code only reads it.
#[derive(Debug, Clone)]
pub struct ThemeState {
    pub selection: ThemeSelection,
    pub styles: Styles,
}

impl ThemeState {
    pub fn new() -> Self {
        let selection = ThemeSelection::default_selection();
        let styles = Styles::from_palette(&selection.palette);
        Self { selection, styles }
    }

    /// Activates a selection and recomputes the style table.
    pub fn apply(&mut self, selection: ThemeSelection) {
        self.styles = Styles::from_palette(&selection.palette);
        self.selection = selection;
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
