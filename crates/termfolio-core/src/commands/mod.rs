//! Command registry and execution.
//!
//! This module provides:
//! - `Command`, the closed set of shell commands in registration order
//! - `resolve_command` for exact and unique-prefix lookup
//! - `CommandResult` for command output and requested front-end effects
//!
//! # Architecture
//!
//! The interpreter resolves the first token of a line to a `Command`, then
//! runs `Command::execute` with the remaining arguments and the session.
//! Failures come back as `ShellError` and are rendered as a single line.

mod execute;
mod result;

pub use execute::Context;
pub use result::{CommandResult, Effect};

use std::fmt;

use log::debug;

// =============================================================================
// Command Enum
// =============================================================================

/// A registered shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Clear,
    Ls,
    Cd,
    Cat,
    Open,
    Theme,
    Banner,
    Typewriter,
    Bg,
}

impl Command {
    /// All commands in registration order.
    pub const ALL: [Command; 17] = [
        Command::Help,
        Command::Whoami,
        Command::About,
        Command::Skills,
        Command::Projects,
        Command::Experience,
        Command::Education,
        Command::Contact,
        Command::Clear,
        Command::Ls,
        Command::Cd,
        Command::Cat,
        Command::Open,
        Command::Theme,
        Command::Banner,
        Command::Typewriter,
        Command::Bg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Whoami => "whoami",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Clear => "clear",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Cat => "cat",
            Self::Open => "open",
            Self::Theme => "theme",
            Self::Banner => "banner",
            Self::Typewriter => "typewriter",
            Self::Bg => "bg",
        }
    }

    /// Usage column of the help listing.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Ls => "ls [path]",
            Self::Cd => "cd <path>",
            Self::Cat => "cat <path>",
            Self::Open => "open <link>",
            Self::Theme => "theme <name>",
            Self::Bg => "bg <mode>",
            other => other.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show this help",
            Self::Whoami => "Show your name and role",
            Self::About => "A short bio",
            Self::Skills => "Key technologies",
            Self::Projects => "Selected projects",
            Self::Experience => "Work history (brief)",
            Self::Education => "Education (brief)",
            Self::Contact => "How to reach me",
            Self::Clear => "Clear the screen",
            Self::Ls => "List a directory of the simulated filesystem",
            Self::Cd => "Change directory",
            Self::Cat => "Print a file",
            Self::Open => "Open external links",
            Self::Theme => "Switch theme (dark, light, matrix)",
            Self::Banner => "Toggle the welcome banner",
            Self::Typewriter => "Toggle typewriter output",
            Self::Bg => "Background: off, particles, matrix, waves",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name {
            "help" => Self::Help,
            "whoami" => Self::Whoami,
            "about" => Self::About,
            "skills" => Self::Skills,
            "projects" => Self::Projects,
            "experience" => Self::Experience,
            "education" => Self::Education,
            "contact" => Self::Contact,
            "clear" => Self::Clear,
            "ls" => Self::Ls,
            "cd" => Self::Cd,
            "cat" => Self::Cat,
            "open" => Self::Open,
            "theme" => Self::Theme,
            "banner" => Self::Banner,
            "typewriter" => Self::Typewriter,
            "bg" => Self::Bg,
            _ => return None,
        };
        Some(cmd)
    }

    /// Get all command names, in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of resolving a typed command token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<T = Command> {
    /// The token is a command name
    Exact(T),
    /// The token prefixes exactly one command
    Unique(T),
    /// The token prefixes several commands (registration order)
    Ambiguous(Vec<&'static str>),
    Unknown,
}

/// Commands whose name starts with `prefix`, in registration order.
pub fn prefix_matches(prefix: &str) -> Vec<Command> {
    Command::ALL
        .into_iter()
        .filter(|cmd| cmd.name().starts_with(prefix))
        .collect()
}

/// Resolve a token: exact name first, then unique prefix.
pub fn resolve_command(token: &str) -> Resolution {
    let resolution = resolve_in(&Command::ALL, Command::name, token);
    debug!("resolved '{}' to {:?}", token, resolution);
    resolution
}

/// Resolution over any name table.
fn resolve_in<T: Copy>(table: &[T], name: fn(T) -> &'static str, token: &str) -> Resolution<T> {
    if let Some(exact) = table.iter().copied().find(|&entry| name(entry) == token) {
        return Resolution::Exact(exact);
    }
    if token.is_empty() {
        return Resolution::Unknown;
    }

    let matches: Vec<T> = table
        .iter()
        .copied()
        .filter(|&entry| name(entry).starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Resolution::Unknown,
        [only] => Resolution::Unique(*only),
        many => Resolution::Ambiguous(many.iter().map(|&entry| name(entry)).collect()),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        }
        assert_eq!(Command::names().count(), 17);
    }

    #[test]
    fn test_registration_order() {
        let names: Vec<_> = Command::names().collect();
        assert_eq!(names.first(), Some(&"help"));
        assert_eq!(names.last(), Some(&"bg"));
        let ls = names.iter().position(|n| *n == "ls").unwrap();
        let cd = names.iter().position(|n| *n == "cd").unwrap();
        assert!(ls < cd);
    }

    #[test]
    fn test_resolve_exact() {
        assert_eq!(resolve_command("ls"), Resolution::Exact(Command::Ls));
        assert_eq!(resolve_command("theme"), Resolution::Exact(Command::Theme));
    }

    #[test]
    fn test_resolve_unique_prefix() {
        assert_eq!(resolve_command("ab"), Resolution::Unique(Command::About));
        assert_eq!(resolve_command("th"), Resolution::Unique(Command::Theme));
        assert_eq!(resolve_command("ty"), Resolution::Unique(Command::Typewriter));
        assert_eq!(resolve_command("l"), Resolution::Unique(Command::Ls));
    }

    #[test]
    fn test_resolve_ambiguous() {
        assert_eq!(
            resolve_command("c"),
            Resolution::Ambiguous(vec!["contact", "clear", "cd", "cat"])
        );
        assert_eq!(
            resolve_command("e"),
            Resolution::Ambiguous(vec!["experience", "education"])
        );
        assert_eq!(resolve_command("b"), Resolution::Ambiguous(vec!["banner", "bg"]));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_command(""), Resolution::Unknown);
        assert_eq!(resolve_command("foobar"), Resolution::Unknown);
        assert_eq!(resolve_command("abouts"), Resolution::Unknown);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve_command("LS"), Resolution::Unknown);
        assert_eq!(resolve_command("Help"), Resolution::Unknown);
    }

    #[test]
    fn test_exact_match_wins_over_longer_names() {
        fn ident(name: &'static str) -> &'static str {
            name
        }
        let table = ["cat", "catalog", "cattle"];

        assert_eq!(resolve_in(&table, ident, "cat"), Resolution::Exact("cat"));
        assert_eq!(resolve_in(&table, ident, "catl"), Resolution::Unique("catalog"));
        assert_eq!(
            resolve_in(&table, ident, "ca"),
            Resolution::Ambiguous(vec!["cat", "catalog", "cattle"])
        );
        assert_eq!(resolve_in(&table, ident, "dog"), Resolution::Unknown);
    }
}
