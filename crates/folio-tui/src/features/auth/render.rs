//! The login page.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::features::auth::state::{AuthState, LoginField, LoginFormState};
use crate::overlays::render_utils::{centered_rect, render_overlay_container};
use crate::styles::Styles;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    auth: &AuthState,
    form: &LoginFormState,
    styles: &Styles,
) {
    let popup = centered_rect(area, 48, 11);
    let inner = render_overlay_container(frame, popup, "Sign in", styles);

    let busy = matches!(auth, AuthState::Authenticating);
    let email_focused = !busy && form.focus == LoginField::Email;
    let password_focused = !busy && form.focus == LoginField::Password;

    let mut lines = vec![
        Line::from(Span::styled("Welcome back", styles.title())),
        Line::from(""),
        field_line("Email", &form.email.display(email_focused), email_focused, styles),
        field_line(
            "Password",
            &form.password.display(password_focused),
            password_focused,
            styles,
        ),
        Line::from(""),
    ];

    if busy {
        lines.push(Line::from(Span::styled("Signing in…", styles.muted())));
    } else if let Some(error) = auth.error() {
        lines.push(Line::from(Span::styled(error.to_string(), styles.error())));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter sign in · Tab switch field · Esc back home",
        styles.muted(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    styles: &Styles,
) -> Line<'a> {
    let label_style = if focused { styles.title() } else { styles.text() };
    Line::from(vec![
        Span::styled(format!("{label:>9}: "), label_style),
        Span::styled(value.to_string(), styles.text()),
    ])
}
