//! Character-by-character text reveal.
//!
//! [`Typewriter`] does not sleep; the renderer drives it, waiting its own
//! delay between ticks. Tests step it synchronously.

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Another character was revealed
    Char(char),
    /// All text is shown, or the run was cancelled
    Done,
}

/// Steppable reveal of one line of text.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the next unrevealed character
    pos: usize,
    cancelled: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
            cancelled: false,
        }
    }

    /// Reveal the next character.
    pub fn tick(&mut self) -> Tick {
        if self.cancelled {
            return Tick::Done;
        }
        match self.text[self.pos..].chars().next() {
            Some(ch) => {
                self.pos += ch.len_utf8();
                Tick::Char(ch)
            }
            None => Tick::Done,
        }
    }

    /// Stop revealing; the text shown so far stays as is.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_done(&self) -> bool {
        self.cancelled || self.pos >= self.text.len()
    }

    /// Text revealed so far.
    pub fn rendered(&self) -> &str {
        &self.text[..self.pos]
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self.tick() {
            Tick::Char(ch) => Some(ch),
            Tick::Done => None,
        }
    }
}
