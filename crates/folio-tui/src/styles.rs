//! The process-wide style table derived from the active palette.
//!
//! This is the TUI analog of document-level style variables: one table, one
//! writer (`ThemeState::apply`), read by every render function. No render
//! code constructs palette colors on its own.

use folio_core::theme::{parse_hex_color, Palette};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub accent: Color,
    pub background: Color,
    pub dark_text: Color,
    pub light_text: Color,
}

impl Styles {
    /// Builds the table from a palette. Registry palettes are pre-validated;
    /// a malformed custom color falls back to the terminal default.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            accent: hex(&palette.colors.accent_color),
            background: hex(&palette.colors.background_color),
            dark_text: hex(&palette.colors.dark_text_color),
            light_text: hex(&palette.colors.light_text_color),
        }
    }

    /// Regular body text on the page background.
    pub fn text(&self) -> Style {
        Style::default().fg(self.dark_text).bg(self.background)
    }

    /// Headings and emphasized labels.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// De-emphasized metadata lines.
    pub fn muted(&self) -> Style {
        Style::default()
            .fg(self.dark_text)
            .bg(self.background)
            .add_modifier(Modifier::DIM)
    }

    /// Selected list rows and active controls.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.light_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Inline error messages.
    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red).bg(self.background)
    }

    /// Success notices.
    pub fn success(&self) -> Style {
        Style::default().fg(Color::Green).bg(self.background)
    }
}

fn hex(value: &str) -> Color {
    match parse_hex_color(value) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use folio_core::theme;

    use super::*;

    #[test]
    fn registry_palette_maps_to_rgb() {
        let styles = Styles::from_palette(theme::default_palette());
        assert_eq!(styles.accent, Color::Rgb(0x6F, 0x11, 0x10));
        assert_eq!(styles.background, Color::Rgb(0xED, 0xEB, 0xDD));
    }

    #[test]
    fn malformed_color_falls_back_to_reset() {
        let mut palette = theme::default_palette().clone();
        palette.colors.accent_color = "oops".to_string();
        let styles = Styles::from_palette(&palette);
        assert_eq!(styles.accent, Color::Reset);
    }
}
