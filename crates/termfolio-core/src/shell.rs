//! The shell as a whole: interpreter, session and input line.

use crate::editor::{Key, LineEditor};
use crate::interpreter::{Interpreter, Submission};
use crate::session::Session;

/// What a key press did.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// The input line changed (or may have); redraw it
    Redraw,
    /// The key had no effect
    Ignored,
    /// Enter was pressed; render these records
    Submitted(Submission),
}

/// A running shell.
#[derive(Debug)]
pub struct Shell {
    interpreter: Interpreter,
    session: Session,
    editor: LineEditor,
}

impl Shell {
    pub fn new(interpreter: Interpreter, session: Session) -> Self {
        Self {
            interpreter,
            session,
            editor: LineEditor::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(ch) => self.editor.insert(ch),
            Key::Backspace => {
                if self.editor.buffer().is_empty() {
                    return KeyOutcome::Ignored;
                }
                self.editor.backspace();
            }
            Key::Up => self.editor.move_up(self.session.history_mut()),
            Key::Down => self.editor.move_down(self.session.history_mut()),
            Key::Tab => {
                if !self.editor.complete() {
                    return KeyOutcome::Ignored;
                }
            }
            Key::Enter => {
                let raw = self.editor.take();
                return KeyOutcome::Submitted(self.submit(&raw));
            }
        }
        KeyOutcome::Redraw
    }

    /// Record `raw` in history and interpret it.
    ///
    /// Session state is fully updated before the records are returned.
    pub fn submit(&mut self, raw: &str) -> Submission {
        self.session.record_submission(raw);
        self.interpreter.submit(&mut self.session, raw)
    }
}
