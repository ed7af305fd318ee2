//! Shared building blocks for the TUI.

pub mod input;
pub mod task;

pub use input::TextField;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};

/// Fetch state of a view's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Formats a backend timestamp for display.
pub fn format_date(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%-d %B %Y %H:%M").to_string()
}

/// Truncates a string to `max` characters, appending an ellipsis when cut.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn truncate_cuts_long_strings() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
    }
}
