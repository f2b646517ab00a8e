//! Line interpreter: tokenize, resolve, dispatch.

use log::debug;

use crate::commands::{CommandResult, Context, Effect, Resolution, resolve_command};
use crate::error::ShellError;
use crate::models::{OutputLine, Profile, SiteContent};
use crate::namespace::NamespaceTree;
use crate::session::Session;

/// Records produced by one submitted line, in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub lines: Vec<OutputLine>,
    pub effects: Vec<Effect>,
}

impl Submission {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.effects.is_empty()
    }
}

/// Process-wide, read-only half of the shell: the namespace and profile.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    fs: NamespaceTree,
    profile: Profile,
}

impl Interpreter {
    pub fn new(fs: NamespaceTree, profile: Profile) -> Self {
        Self { fs, profile }
    }

    pub fn from_content(content: &SiteContent) -> Self {
        Self::new(
            NamespaceTree::from_manifest(&content.filesystem),
            content.profile.clone(),
        )
    }

    pub fn fs(&self) -> &NamespaceTree {
        &self.fs
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Interpret one raw line against the session.
    ///
    /// Blank input produces nothing. Otherwise the first record echoes the
    /// prompt and trimmed line, followed by the command output or a single
    /// failure line.
    pub fn submit(&self, session: &mut Session, raw: &str) -> Submission {
        let line = raw.trim();
        if line.is_empty() {
            return Submission::default();
        }

        let echo = OutputLine::command(session.prompt(), line);

        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let result = self.dispatch(session, name, &args);

        let mut submission = Submission {
            lines: vec![echo],
            effects: Vec::new(),
        };
        match result {
            Ok(CommandResult { output, effects }) => {
                submission.lines.extend(output);
                submission.effects = effects;
            }
            Err(err) => {
                debug!("'{}' failed: {}", line, err);
                submission.lines.push(failure_line(&err));
            }
        }
        submission
    }

    fn dispatch(
        &self,
        session: &mut Session,
        name: &str,
        args: &[String],
    ) -> Result<CommandResult, ShellError> {
        let command = match resolve_command(name) {
            Resolution::Exact(cmd) | Resolution::Unique(cmd) => cmd,
            Resolution::Ambiguous(candidates) => {
                return Err(ShellError::AmbiguousCommand {
                    token: name.to_string(),
                    candidates,
                });
            }
            Resolution::Unknown => return Err(ShellError::UnknownCommand(name.to_string())),
        };

        let mut ctx = Context {
            fs: &self.fs,
            profile: &self.profile,
            session,
        };
        command.execute(args, &mut ctx)
    }
}

/// Resolution problems are informational; handler failures are errors.
fn failure_line(err: &ShellError) -> OutputLine {
    match err {
        ShellError::AmbiguousCommand { .. } | ShellError::UnknownCommand(_) => {
            OutputLine::info(err.to_string())
        }
        _ => OutputLine::error(err.to_string()),
    }
}
