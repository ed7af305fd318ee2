//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects. All colors come from the
//! style table owned by the theme feature.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::features::nav::{HomeView, Page};
use crate::features::{auth, dashboard, home, probe};
use crate::overlays::Overlay;
use crate::state::AppState;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let styles = &state.theme.styles;

    // Paint the page background first; everything draws on top of it.
    frame.render_widget(
        Block::default().style(Style::default().bg(styles.background)),
        area,
    );

    // Until the probe resolves, the waking/checking screen is the whole UI.
    if !state.probe.is_ready() {
        probe::render(frame, area, &state.probe, state.spinner_frame, styles);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);

    let body = chunks[2];
    match state.nav.page {
        Page::Home => home::render::render(
            frame,
            body,
            &state.nav,
            &state.home,
            &state.auth,
            styles,
        ),
        Page::Dashboard => dashboard::render::render(
            frame,
            body,
            &state.dashboard,
            state.auth.identity(),
            styles,
        ),
        Page::Login => auth::render::render(frame, body, &state.auth, &state.login, styles),
    }

    render_footer(app, frame, chunks[3]);

    match &app.overlay {
        Some(Overlay::ThemePicker(picker)) => picker.render(frame, area, styles),
        Some(Overlay::Confirm(confirm)) => confirm.render(frame, area, styles),
        None => {}
    }
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let state = &app.tui;
    let styles = &state.theme.styles;

    let who = state
        .auth
        .identity()
        .map_or_else(|| "anonymous".to_string(), |identity| identity.email.clone());
    let left = Line::from(vec![
        Span::styled("folio", styles.title()),
        Span::styled(format!("  {}", state.config.base_url), styles.muted()),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    let right = format!("{who} · {}", state.theme.selection.palette.name);
    let width = right.chars().count() as u16;
    if area.width > width {
        let right_area = Rect::new(area.x + area.width - width, area.y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(right, styles.muted()))),
            right_area,
        );
    }
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let state = &app.tui;
    let hints = match state.nav.page {
        Page::Login => "Enter sign in · Esc home · Ctrl+C quit",
        Page::Dashboard => "n new · d delete · t theme · l logout · h home · q quit",
        Page::Home => match state.nav.home_view() {
            HomeView::Listing => "↑↓ move · Enter open · t theme · l sign in · q quit",
            HomeView::User(_) => "↑↓ move · Enter open blog · Esc back · q quit",
            HomeView::Blog(_) => "↑↓ move · Enter open post · / filter · Esc back · q quit",
            HomeView::Post(_) => "↑↓ comments · c comment · Esc back · q quit",
        },
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, state.theme.styles.muted()))),
        area,
    );
}
