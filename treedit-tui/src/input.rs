//! Single-line text field used for renaming.

use crate::event::{Key, Modifiers};

/// Outcome of feeding a key to a [`TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Text changed.
    Changed,
    /// Cursor moved or nothing happened, no event needed.
    Handled,
    /// Enter was pressed.
    Submitted,
    /// Escape was pressed.
    Cancelled,
    /// Key is not for the input.
    Ignored,
}

/// Text content and cursor (byte offset, always on a char boundary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create an input with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text before and after the cursor.
    pub fn split(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputResult {
        match key {
            Key::Enter => InputResult::Submitted,
            Key::Escape => InputResult::Cancelled,

            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                InputResult::Changed
            }

            Key::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    InputResult::Changed
                }
                None => InputResult::Handled,
            },

            Key::Delete => match self.next_boundary() {
                Some(next) => {
                    self.text.replace_range(self.cursor..next, "");
                    InputResult::Changed
                }
                None => InputResult::Handled,
            },

            Key::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                InputResult::Handled
            }

            Key::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                InputResult::Handled
            }

            Key::Home => {
                self.cursor = 0;
                InputResult::Handled
            }

            Key::End => {
                self.cursor = self.text.len();
                InputResult::Handled
            }

            _ => InputResult::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
