//! Shared rendering utilities for overlays.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use crate::styles::Styles;

/// Centers a `width` x `height` popup inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the popup area and draws the bordered container.
/// Returns the inner area for content.
pub fn render_overlay_container(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    styles: &Styles,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(styles.accent).bg(styles.background))
        .style(Style::default().bg(styles.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
