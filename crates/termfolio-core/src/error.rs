//! Error types for the shell core.
//!
//! - [`ShellError`] - Recoverable command failures, reported inline as one line
//! - [`PathError`] - Path resolution failures
//! - [`StoreError`] - Key-value store failures
//! - [`ContentError`] - Site content loading failures

use thiserror::Error;

/// A command failure. The `Display` text is exactly what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The token prefixes more than one command
    #[error("Ambiguous command \"{token}\". Did you mean: {}?", .candidates.join(", "))]
    AmbiguousCommand {
        token: String,
        candidates: Vec<&'static str>,
    },
    /// The token matches no command
    #[error("Command not found: {0}. Type 'help' to list commands.")]
    UnknownCommand(String),
    #[error("{}", path_not_found(.command, .path))]
    PathNotFound { command: &'static str, path: String },
    #[error("{command}: not a directory: {path}")]
    NotADirectory { command: &'static str, path: String },
    #[error("{command}: {path}: Is a directory")]
    IsADirectory { command: &'static str, path: String },
    /// An enumerated-option command got a value outside its set
    #[error("{command}: options are {}", .options.join(", "))]
    InvalidOption {
        command: &'static str,
        options: Vec<&'static str>,
    },
    #[error("{command}: {message}")]
    MissingOperand {
        command: &'static str,
        message: &'static str,
    },
    #[error("{command}: unsupported URL '{url}' (expected http://, https:// or mailto:)")]
    InvalidUrl { command: &'static str, url: String },
}

fn path_not_found(command: &str, path: &str) -> String {
    match command {
        "cd" => format!("cd: no such file or directory: {}", path),
        "ls" => format!("ls: cannot access '{}': No such file or directory", path),
        _ => format!("{}: {}: No such file", command, path),
    }
}

/// Path resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment does not exist, or descends through a file
    #[error("no such file or directory: {0}")]
    NotFound(String),
}

impl PathError {
    /// Report this failure as a command error.
    pub fn for_command(self, command: &'static str) -> ShellError {
        match self {
            Self::NotFound(path) => ShellError::PathNotFound { command, path },
        }
    }
}

/// Key-value store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Site content could not be loaded.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}
