//! Theme picker overlay.
//!
//! Lists the registry palettes in display order plus a trailing "Custom…"
//! entry that switches to a one-line color editor (four hex values).

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::theme::{self, parse_hex_color, ThemeColors};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::render_utils::{centered_rect, render_overlay_container};
use super::OverlayOutcome;
use crate::common::TextField;
use crate::styles::Styles;

#[derive(Debug, Clone)]
pub struct ThemePickerState {
    pub cursor: usize,
    /// When set, the picker is in custom-color entry mode.
    pub custom: Option<TextField>,
    pub error: Option<String>,
}

impl ThemePickerState {
    /// Opens the picker with the cursor on the currently active palette.
    pub fn open(current_id: &str) -> Self {
        let cursor = theme::palettes()
            .iter()
            .position(|palette| palette.id == current_id)
            .unwrap_or(0);
        Self {
            cursor,
            custom: None,
            error: None,
        }
    }

    fn entry_count() -> usize {
        // Registry palettes plus the trailing custom entry.
        theme::palettes().len() + 1
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayOutcome {
        if let Some(field) = &mut self.custom {
            return match key.code {
                KeyCode::Esc => {
                    self.custom = None;
                    self.error = None;
                    OverlayOutcome::Stay
                }
                KeyCode::Enter => match parse_custom_colors(field.value()) {
                    Ok(colors) => OverlayOutcome::ChooseCustom(colors),
                    Err(message) => {
                        self.error = Some(message);
                        OverlayOutcome::Stay
                    }
                },
                _ => {
                    field.handle_key(key);
                    OverlayOutcome::Stay
                }
            };
        }

        match key.code {
            KeyCode::Esc => OverlayOutcome::Close,
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                OverlayOutcome::Stay
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(Self::entry_count() - 1);
                OverlayOutcome::Stay
            }
            KeyCode::Enter => {
                if let Some(palette) = theme::palettes().get(self.cursor) {
                    OverlayOutcome::ChoosePalette(palette.id.clone())
                } else {
                    self.custom = Some(TextField::new());
                    OverlayOutcome::Stay
                }
            }
            _ => OverlayOutcome::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let height = (Self::entry_count() as u16 + 4).max(8);
        let popup = centered_rect(area, 44, height);
        let inner = render_overlay_container(frame, popup, "Theme", styles);

        if let Some(field) = &self.custom {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Accent, background, dark text, light text:",
                    styles.text(),
                )),
                Line::from(Span::styled(field.display(true), styles.text())),
                Line::from(""),
            ];
            if let Some(error) = &self.error {
                lines.push(Line::from(Span::styled(error.clone(), styles.error())));
            } else {
                lines.push(Line::from(Span::styled(
                    "Enter to apply, Esc to go back",
                    styles.muted(),
                )));
            }
            frame.render_widget(Paragraph::new(lines), inner);
            return;
        }

        let mut items: Vec<ListItem> = theme::palettes()
            .iter()
            .map(|palette| {
                ListItem::new(Line::from(vec![
                    Span::styled(palette.name.clone(), styles.text()),
                    Span::styled(
                        format!("  {}", palette.colors.accent_color),
                        styles.muted(),
                    ),
                ]))
            })
            .collect();
        items.push(ListItem::new(Line::from(Span::styled(
            "Custom…",
            styles.text().add_modifier(Modifier::ITALIC),
        ))));

        let list = List::new(items)
            .style(Style::default().bg(styles.background))
            .highlight_style(styles.highlight())
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.cursor));
        frame.render_stateful_widget(list, inner, &mut list_state);
    }
}

/// Parses four whitespace- or comma-separated `#RRGGBB` values.
pub fn parse_custom_colors(input: &str) -> Result<ThemeColors, String> {
    let values: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if values.len() != 4 {
        return Err("Expected four colors: accent background dark light".to_string());
    }
    for value in &values {
        if parse_hex_color(value).is_none() {
            return Err(format!("Not a #RRGGBB color: {value}"));
        }
    }
    Ok(ThemeColors {
        accent_color: values[0].to_string(),
        background_color: values[1].to_string(),
        dark_text_color: values[2].to_string(),
        light_text_color: values[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_on_palette_chooses_it() {
        let mut picker = ThemePickerState::open("forest");
        assert_eq!(picker.cursor, 1);
        let outcome = picker.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            outcome,
            OverlayOutcome::ChoosePalette(id) if id == "forest"
        ));
    }

    #[test]
    fn enter_on_trailing_entry_opens_custom_editor() {
        let mut picker = ThemePickerState::open("burgundy");
        for _ in 0..theme::palettes().len() {
            picker.handle_key(key(KeyCode::Down));
        }
        let outcome = picker.handle_key(key(KeyCode::Enter));
        assert!(matches!(outcome, OverlayOutcome::Stay));
        assert!(picker.custom.is_some());
    }

    #[test]
    fn parse_custom_colors_accepts_four_hex_values() {
        let colors = parse_custom_colors("#112233 #445566, #000000 #ffffff").unwrap();
        assert_eq!(colors.accent_color, "#112233");
        assert_eq!(colors.light_text_color, "#ffffff");
    }

    #[test]
    fn parse_custom_colors_rejects_bad_input() {
        assert!(parse_custom_colors("#112233 #445566 #000000").is_err());
        assert!(parse_custom_colors("#112233 #445566 #000000 banana").is_err());
    }

    #[test]
    fn unknown_current_id_defaults_to_first_entry() {
        let picker = ThemePickerState::open("custom");
        assert_eq!(picker.cursor, 0);
    }
}
