//! Minimal text entry for forms.
//!
//! The forms here are small (login, a post editor, one comment line), so this
//! is a deliberately lean field: char-indexed cursor, insert/delete, paste,
//! optional masking for passwords, optional multiline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// Cursor position in chars (0..=len).
    cursor: usize,
    masked: bool,
    multiline: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field whose content renders as bullets (passwords).
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    /// A field that accepts Enter as a newline instead of leaving it to the
    /// surrounding form.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// The string to render: masked if requested, with a cursor marker
    /// inserted at the edit position.
    pub fn display(&self, focused: bool) -> String {
        let shown: String = if self.masked {
            self.value.chars().map(|_| '•').collect()
        } else {
            self.value.clone()
        };
        if !focused {
            return shown;
        }
        let byte_idx = char_to_byte(&shown, self.cursor);
        let mut out = shown;
        out.insert(byte_idx, '▏');
        out
    }

    fn insert_char(&mut self, ch: char) {
        let byte_idx = char_to_byte(&self.value, self.cursor);
        self.value.insert(byte_idx, ch);
        self.cursor += 1;
    }

    fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' && !self.multiline {
                continue;
            }
            if ch == '\r' {
                continue;
            }
            self.insert_char(ch);
        }
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = char_to_byte(&self.value, self.cursor - 1);
        self.value.remove(byte_idx);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let byte_idx = char_to_byte(&self.value, self.cursor);
        self.value.remove(byte_idx);
    }

    /// Handles a key aimed at this field. Returns true if consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                true
            }
            KeyCode::Enter if self.multiline => {
                self.insert_char('\n');
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Handles pasted text (bracketed paste).
    pub fn handle_paste(&mut self, text: &str) {
        self.insert_str(text);
    }
}

fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(idx, _)| idx)
}
