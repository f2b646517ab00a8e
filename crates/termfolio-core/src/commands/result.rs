//! Command execution result type.

use crate::models::{Background, OutputLine, Theme};

/// Something the front end has to do beyond printing lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Wipe the scrollback (`clear`)
    ClearScreen,
    /// Open an external link (`open`)
    OpenUrl(String),
    /// Apply a new color theme
    ApplyTheme(Theme),
    /// Restart the background animation in a new mode
    SetBackground(Background),
}

/// Result of executing a command.
///
/// Commands can produce output and optionally request front-end effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Effects to apply after the output is queued
    pub effects: Vec<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no effects.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effects: vec![],
        }
    }

    /// Create a result with a single text line.
    pub fn line(text: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::text(text)])
    }

    /// Create an empty result (no output, no effects).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
