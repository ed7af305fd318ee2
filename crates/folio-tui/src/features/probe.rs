//! Startup probe presentation.
//!
//! While the health request is unanswered nothing else is mounted: the
//! whole screen belongs to one of these states.

use folio_core::probe::ProbePhase;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::Styles;

/// Spinner frames for the pending states.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    phase: &ProbePhase,
    spinner_frame: usize,
    styles: &Styles,
) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let lines = match phase {
        ProbePhase::Checking { .. } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{spinner} Connecting…"),
                styles.text(),
            )),
        ],
        ProbePhase::Waking { .. } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{spinner} Waking the server up…"),
                styles.title(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The backend is cold-starting; this can take up to a minute.",
                styles.muted(),
            )),
        ],
        ProbePhase::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled("Could not reach the backend", styles.error())),
            Line::from(Span::styled(message.clone(), styles.muted())),
            Line::from(""),
            Line::from(Span::styled("r retry · q quit", styles.muted())),
        ],
        ProbePhase::Ready => vec![],
    };

    let vertical_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect::new(
        area.x,
        area.y + vertical_pad,
        area.width,
        area.height.saturating_sub(vertical_pad),
    );
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        centered,
    );
}
