//! Destructive-action confirmation overlay.
//!
//! The TUI analog of the browser confirm dialog: deletes only proceed after
//! an explicit yes, and the backing item stays in place until the backend
//! confirms.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::render_utils::{centered_rect, render_overlay_container};
use super::OverlayOutcome;
use crate::styles::Styles;

/// The pending destructive action.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeletePost { post_id: String },
    DeleteComment { post_id: String, comment_id: String },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmState {
    pub fn delete_post(post_id: String) -> Self {
        Self {
            message: "Delete this post?".to_string(),
            action: ConfirmAction::DeletePost { post_id },
        }
    }

    pub fn delete_comment(post_id: String, comment_id: String) -> Self {
        Self {
            message: "Delete this comment?".to_string(),
            action: ConfirmAction::DeleteComment {
                post_id,
                comment_id,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayOutcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => OverlayOutcome::Confirmed(self.action.clone()),
            KeyCode::Char('n') | KeyCode::Esc => OverlayOutcome::Close,
            _ => OverlayOutcome::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let popup = centered_rect(area, 40, 5);
        let inner = render_overlay_container(frame, popup, "Confirm", styles);
        let lines = vec![
            Line::from(Span::styled(self.message.clone(), styles.text())),
            Line::from(""),
            Line::from(Span::styled("y to delete, n to keep", styles.muted())),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn yes_confirms_and_no_closes() {
        let mut state = ConfirmState::delete_post("p1".to_string());

        let yes = state.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        assert!(matches!(
            yes,
            OverlayOutcome::Confirmed(ConfirmAction::DeletePost { post_id }) if post_id == "p1"
        ));

        let no = state.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(matches!(no, OverlayOutcome::Close));
    }
}
