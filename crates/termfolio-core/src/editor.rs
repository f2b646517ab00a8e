//! Input line state: buffer editing, history recall, Tab completion.

use crate::autocomplete;
use crate::history::{History, Recall};

/// Editing keys understood by the line editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Up,
    Down,
    Tab,
    Enter,
}

/// The line being typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn insert(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Recall the previous history entry.
    pub fn move_up(&mut self, history: &mut History) {
        self.apply(history.up());
    }

    /// Recall the next history entry, or a fresh line past the newest.
    pub fn move_down(&mut self, history: &mut History) {
        self.apply(history.down());
    }

    fn apply(&mut self, recall: Recall<'_>) {
        match recall {
            Recall::Unchanged => {}
            Recall::Entry(entry) => self.buffer = entry.to_string(),
            Recall::Fresh => self.buffer.clear(),
        }
    }

    /// Tab completion; returns whether the buffer changed.
    pub fn complete(&mut self) -> bool {
        match autocomplete::complete(&self.buffer) {
            Some(completed) => {
                self.buffer = completed;
                true
            }
            None => false,
        }
    }

    /// Take the raw, untrimmed line and clear the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Command suggested for the current buffer.
    pub fn suggestion(&self) -> Option<&'static str> {
        autocomplete::suggestion(&self.buffer)
    }

    /// Untyped remainder of the suggestion.
    pub fn ghost(&self) -> Option<&'static str> {
        autocomplete::ghost_suffix(&self.buffer)
    }
}
