//! Home page views.

use folio_core::api::types::{Blog, Comment, Post, User};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::common::{format_date, truncate_with_ellipsis, Loadable};
use crate::features::auth::AuthState;
use crate::features::home::state::{can_delete_comment, HomeState};
use crate::features::nav::{HomeView, NavState};
use crate::styles::Styles;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    nav: &NavState,
    home: &HomeState,
    auth: &AuthState,
    styles: &Styles,
) {
    match nav.home_view() {
        HomeView::Listing => render_listing(frame, area, home, auth, styles),
        HomeView::User(_) => render_portfolio(frame, area, home, styles),
        HomeView::Blog(_) => render_blog(frame, area, home, styles),
        HomeView::Post(_) => render_post(frame, area, home, auth, styles),
    }
}

fn render_status<T>(
    frame: &mut Frame,
    area: Rect,
    data: &Loadable<T>,
    styles: &Styles,
) -> bool {
    match data {
        Loadable::Loading => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("Loading…", styles.muted()))),
                area,
            );
            true
        }
        Loadable::Failed(message) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message.clone(), styles.error()))),
                area,
            );
            true
        }
        Loadable::Ready(_) => false,
    }
}

// ============================================================================
// Users listing
// ============================================================================

fn render_listing(
    frame: &mut Frame,
    area: Rect,
    home: &HomeState,
    auth: &AuthState,
    styles: &Styles,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let subtitle = if auth.is_authenticated() {
        "Browse the portfolios and blogs of everyone here."
    } else {
        "Create, share and manage portfolios and blogs. Press l to sign in."
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Portfolios", styles.title())),
            Line::from(Span::styled(subtitle, styles.muted())),
        ]),
        chunks[0],
    );

    if render_status(frame, chunks[1], &home.users.users, styles) {
        return;
    }
    let Some(users) = home.users.users.ready() else {
        return;
    };
    if users.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No portfolios yet.", styles.muted()))),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = users.iter().map(|user| user_row(user, styles)).collect();
    let list = List::new(items)
        .style(Style::default().bg(styles.background))
        .highlight_style(styles.highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(home.users.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn user_row<'a>(user: &User, styles: &Styles) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(user.name.clone(), styles.text()),
        Span::styled(format!("  {}", user.email), styles.muted()),
    ]))
}

// ============================================================================
// User portfolio
// ============================================================================

fn render_portfolio(frame: &mut Frame, area: Rect, home: &HomeState, styles: &Styles) {
    let Some(pane) = &home.portfolio else {
        return;
    };
    if render_status(frame, area, &pane.data, styles) {
        return;
    }
    let Some((user, blogs)) = pane.data.ready() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let mut header = vec![
        Line::from(Span::styled(user.name.clone(), styles.title())),
        Line::from(Span::styled(user.email.clone(), styles.muted())),
    ];
    if let Some(bio) = &user.bio {
        header.push(Line::from(Span::styled(bio.clone(), styles.text())));
    }
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);

    if blogs.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "This user has no blogs yet.",
                styles.muted(),
            ))),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = blogs.iter().map(|blog| blog_row(blog, styles)).collect();
    let list = List::new(items)
        .style(Style::default().bg(styles.background))
        .highlight_style(styles.highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(pane.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn blog_row<'a>(blog: &Blog, styles: &Styles) -> ListItem<'a> {
    let posts = blog
        .post_count
        .map_or(String::new(), |count| format!("  {count} posts"));
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(blog.title.clone(), styles.text()),
            Span::styled(posts, styles.muted()),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(&blog.description, 80),
            styles.muted(),
        )),
    ])
}

// ============================================================================
// Blog detail
// ============================================================================

fn render_blog(frame: &mut Frame, area: Rect, home: &HomeState, styles: &Styles) {
    let Some(pane) = &home.blog else {
        return;
    };
    if render_status(frame, area, &pane.data, styles) {
        return;
    }
    let Some((blog, _)) = pane.data.ready() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(blog.title.clone(), styles.title())),
            Line::from(Span::styled(
                format!("by {} · {}", blog.author, format_date(&blog.created_at)),
                styles.muted(),
            )),
            Line::from(Span::styled(blog.description.clone(), styles.text())),
        ])
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let filter_line = if pane.filtering {
        Line::from(vec![
            Span::styled("Filter: ", styles.text()),
            Span::styled(pane.filter.display(true), styles.text()),
        ])
    } else if !pane.filter.value().is_empty() {
        Line::from(Span::styled(
            format!("Filter: {}  (/ to edit)", pane.filter.value()),
            styles.muted(),
        ))
    } else {
        Line::from(Span::styled("/ to filter posts", styles.muted()))
    };
    frame.render_widget(Paragraph::new(filter_line), chunks[1]);

    let visible = pane.visible_posts();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No posts here.", styles.muted()))),
            chunks[2],
        );
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|post| post_row(post, styles)).collect();
    let list = List::new(items)
        .style(Style::default().bg(styles.background))
        .highlight_style(styles.highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(pane.cursor.min(visible.len() - 1)));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn post_row<'a>(post: &Post, styles: &Styles) -> ListItem<'a> {
    let comments = post
        .comment_count
        .map_or(String::new(), |count| format!("  {count} comments"));
    ListItem::new(Line::from(vec![
        Span::styled(post.title.clone(), styles.text()),
        Span::styled(
            format!("  {}{comments}", format_date(&post.created_at)),
            styles.muted(),
        ),
    ]))
}

// ============================================================================
// Post detail + comments
// ============================================================================

fn render_post(
    frame: &mut Frame,
    area: Rect,
    home: &HomeState,
    auth: &AuthState,
    styles: &Styles,
) {
    let Some(pane) = &home.post else {
        return;
    };
    if render_status(frame, area, &pane.data, styles) {
        return;
    }
    let Some((post, comments)) = pane.data.ready() else {
        return;
    };

    let body_height = (area.height / 2).max(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(body_height),
            Constraint::Min(0),
        ])
        .split(area);

    let mut meta = vec![Span::styled(
        format!("by {}", post.author.as_deref().unwrap_or("unknown")),
        styles.muted(),
    )];
    if let Some(blog_title) = &post.blog_title {
        meta.push(Span::styled(format!(" · {blog_title}"), styles.muted()));
    }
    meta.push(Span::styled(
        format!(" · {}", format_date(&post.created_at)),
        styles.muted(),
    ));
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(post.title.clone(), styles.title())),
            Line::from(meta),
        ]),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(post.content.clone(), styles.text()))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    render_comments(frame, chunks[2], pane, comments, auth, styles);
}

fn render_comments(
    frame: &mut Frame,
    area: Rect,
    pane: &crate::features::home::state::PostPane,
    comments: &[Comment],
    auth: &AuthState,
    styles: &Styles,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Comments ({})", comments.len()),
            styles.title(),
        ))),
        chunks[0],
    );

    let composer: Vec<Line> = if pane.composing {
        let status = if pane.submitting {
            Span::styled("  sending…", styles.muted())
        } else {
            Span::styled("  Enter to send, Esc to cancel", styles.muted())
        };
        vec![
            Line::from(vec![
                Span::styled("> ", styles.text()),
                Span::styled(pane.comment.display(!pane.submitting), styles.text()),
            ]),
            Line::from(status),
        ]
    } else if auth.is_authenticated() {
        vec![Line::from(Span::styled("c to write a comment", styles.muted()))]
    } else {
        vec![Line::from(Span::styled(
            "Sign in to join the conversation.",
            styles.muted(),
        ))]
    };
    let mut composer_lines = composer;
    if let Some(error) = &pane.error {
        composer_lines.push(Line::from(Span::styled(error.clone(), styles.error())));
    }
    frame.render_widget(Paragraph::new(composer_lines), chunks[1]);

    if comments.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No comments yet. Be the first!",
                styles.muted(),
            ))),
            chunks[2],
        );
        return;
    }

    let items: Vec<ListItem> = comments
        .iter()
        .map(|comment| {
            // The delete hint renders only for the comment's author; for
            // everyone else the control does not exist.
            let own = can_delete_comment(auth.identity(), comment);
            let mut heading = vec![
                Span::styled(comment.author.clone(), styles.text()),
                Span::styled(
                    format!("  {}", format_date(&comment.created_at)),
                    styles.muted(),
                ),
            ];
            if own {
                heading.push(Span::styled("  d to delete", styles.muted()));
            }
            ListItem::new(vec![
                Line::from(heading),
                Line::from(Span::styled(comment.content.clone(), styles.text())),
            ])
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().bg(styles.background))
        .highlight_style(styles.highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(pane.cursor));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}
