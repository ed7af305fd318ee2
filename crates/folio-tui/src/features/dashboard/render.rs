//! Dashboard view: stats, messages, the new-post editor, and my posts.

use folio_core::api::types::{Identity, Post};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::common::{format_date, truncate_with_ellipsis, Loadable};
use crate::features::dashboard::state::{DashboardState, NewPostForm, PostField};
use crate::styles::Styles;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    identity: Option<&Identity>,
    styles: &Styles,
) {
    let form_height = if dashboard.form.is_some() { 8 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(form_height),
            Constraint::Min(0),
        ])
        .split(area);

    let email = identity.map_or("?", |identity| identity.email.as_str());
    let count = dashboard.posts.ready().map_or(0, Vec::len);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Dashboard", styles.title())),
            Line::from(Span::styled(
                format!("Welcome back, {email} · {count} posts published"),
                styles.muted(),
            )),
        ]),
        chunks[0],
    );

    // One line for transient feedback: error wins over notice.
    let feedback = if let Some(error) = &dashboard.error {
        Line::from(Span::styled(error.clone(), styles.error()))
    } else if let Some(notice) = &dashboard.notice {
        Line::from(Span::styled(notice.message.clone(), styles.success()))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(feedback), chunks[1]);

    if let Some(form) = &dashboard.form {
        render_form(frame, chunks[2], form, styles);
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "n new post · d delete · l logout · h home",
                styles.muted(),
            ))),
            chunks[2],
        );
    }

    render_posts(frame, chunks[3], dashboard, styles);
}

fn render_form(frame: &mut Frame, area: Rect, form: &NewPostForm, styles: &Styles) {
    let title_focused = form.focus == PostField::Title && !form.saving;
    let content_focused = form.focus == PostField::Content && !form.saving;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Title: ", styles.title()),
            Span::styled(form.title.display(title_focused), styles.text()),
        ]),
        Line::from(Span::styled("Content:", styles.title())),
    ];
    for row in form.content.display(content_focused).split('\n').take(3) {
        lines.push(Line::from(Span::styled(row.to_string(), styles.text())));
    }
    let status = if form.saving {
        "saving…"
    } else {
        "Tab switch field · Ctrl+S publish · Esc discard"
    };
    lines.push(Line::from(Span::styled(status, styles.muted())));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), styles.error())));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_posts(frame: &mut Frame, area: Rect, dashboard: &DashboardState, styles: &Styles) {
    match &dashboard.posts {
        Loadable::Loading => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("Loading posts…", styles.muted()))),
                area,
            );
        }
        Loadable::Failed(message) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message.clone(), styles.error()))),
                area,
            );
        }
        Loadable::Ready(posts) if posts.is_empty() => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Nothing published yet. Press n to start sharing!",
                    styles.muted(),
                ))),
                area,
            );
        }
        Loadable::Ready(posts) => {
            let items: Vec<ListItem> = posts.iter().map(|post| post_row(post, styles)).collect();
            let list = List::new(items)
                .style(Style::default().bg(styles.background))
                .highlight_style(styles.highlight())
                .highlight_symbol("▶ ");
            let mut state = ListState::default();
            state.select(Some(dashboard.cursor));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn post_row<'a>(post: &Post, styles: &Styles) -> ListItem<'a> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(post.title.clone(), styles.text()),
            Span::styled(format!("  {}", format_date(&post.created_at)), styles.muted()),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(&post.content, 100),
            styles.muted(),
        )),
    ])
}
