//! Command history with an Up/Down browsing cursor.

/// What a history move did to the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// History is empty; leave the buffer alone
    Unchanged,
    /// Replace the buffer with this entry
    Entry(&'a str),
    /// Back past the newest entry; clear the buffer
    Fresh,
}

/// Submitted lines, oldest first, plus the browsing cursor.
///
/// The cursor ranges over `0..=len`; `len` means a fresh, unsubmitted line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(entries: Vec<String>) -> Self {
        let cursor = entries.len();
        Self { entries, cursor }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a line as typed and reset the cursor.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.reset_cursor();
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Step to the previous (older) entry, stopping at the oldest.
    pub fn up(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }
        self.cursor = self.cursor.saturating_sub(1);
        Recall::Entry(&self.entries[self.cursor])
    }

    /// Step to the next (newer) entry, ending on a fresh line.
    pub fn down(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }
        self.cursor = (self.cursor + 1).min(self.entries.len());
        match self.entries.get(self.cursor) {
            Some(entry) => Recall::Entry(entry),
            None => Recall::Fresh,
        }
    }
}
