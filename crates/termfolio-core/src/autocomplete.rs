//! Command-name suggestion and Tab completion.
//!
//! Both look only at the first whitespace-delimited token of the buffer:
//! - Suggestion: the single command that extends the token, shown as ghost text
//! - Tab: replace the token with the single matching command plus a space
//!
//! A buffer with leading whitespace has an empty first token and never
//! completes.

use std::sync::LazyLock;

use regex::Regex;

use crate::commands::{Command, prefix_matches};

/// Whitespace runs separating tokens.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// ============================================================================
// Token Splitting
// ============================================================================

/// First token and the tokens after it. Leading whitespace yields an empty
/// first token and a trailing run yields an empty last token.
fn split_tokens(buffer: &str) -> (&str, Vec<&str>) {
    let mut parts = WHITESPACE.split(buffer);
    let first = parts.next().unwrap_or("");
    (first, parts.collect())
}

/// The only command starting with `partial`, if exactly one does.
fn unique_match(partial: &str) -> Option<Command> {
    match prefix_matches(partial).as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Command to suggest for the current buffer.
///
/// Empty when the first token is empty, matches zero or several commands,
/// or already spells the match out.
pub fn suggestion(buffer: &str) -> Option<&'static str> {
    let (partial, _) = split_tokens(buffer);
    if partial.is_empty() {
        return None;
    }

    unique_match(partial)
        .map(Command::name)
        .filter(|name| *name != partial)
}

/// The part of the suggestion not typed yet, for ghost-text rendering.
///
/// Only while the cursor still sits on the first token: once a space or an
/// argument follows, the suffix would land after them.
pub fn ghost_suffix(buffer: &str) -> Option<&'static str> {
    let (partial, rest) = split_tokens(buffer);
    if !rest.is_empty() {
        return None;
    }
    suggestion(buffer).map(|name| &name[partial.len()..])
}

/// Tab completion: the new buffer, or `None` to leave it untouched.
///
/// Later tokens are kept, rejoined with single spaces.
pub fn complete(buffer: &str) -> Option<String> {
    let (partial, rest) = split_tokens(buffer);
    let name = unique_match(partial)?.name();

    if rest.is_empty() {
        Some(format!("{} ", name))
    } else {
        Some(format!("{} {}", name, rest.join(" ")))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_unique_prefix() {
        assert_eq!(suggestion("a"), Some("about"));
        assert_eq!(suggestion("l"), Some("ls"));
        assert_eq!(suggestion("ty"), Some("typewriter"));
        assert_eq!(suggestion("th dark"), Some("theme"));
    }

    #[test]
    fn test_suggestion_none() {
        assert_eq!(suggestion(""), None);
        assert_eq!(suggestion("c"), None);
        assert_eq!(suggestion("ls"), None);
        assert_eq!(suggestion("xyz"), None);
        assert_eq!(suggestion("  ab"), None);
    }

    #[test]
    fn test_ghost_suffix() {
        assert_eq!(ghost_suffix("ab"), Some("out"));
        assert_eq!(ghost_suffix("wh"), Some("oami"));
        assert_eq!(ghost_suffix("cat"), None);
    }

    #[test]
    fn test_ghost_suffix_hidden_after_first_token() {
        assert_eq!(suggestion("th light"), Some("theme"));
        assert_eq!(ghost_suffix("th light"), None);
        assert_eq!(ghost_suffix("th "), None);
        assert_eq!(ghost_suffix("th"), Some("eme"));
    }

    #[test]
    fn test_complete_single_match() {
        assert_eq!(complete("cle"), Some("clear ".to_string()));
        assert_eq!(complete("cd"), Some("cd ".to_string()));
        assert_eq!(complete("ab "), Some("about ".to_string()));
    }

    #[test]
    fn test_complete_keeps_later_tokens() {
        assert_eq!(complete("th  light"), Some("theme light".to_string()));
        assert_eq!(complete("ca a  b "), Some("cat a b ".to_string()));
    }

    #[test]
    fn test_complete_leaves_buffer_alone() {
        assert_eq!(complete("c"), None);
        assert_eq!(complete(""), None);
        assert_eq!(complete("xyz"), None);
        assert_eq!(complete(" ls"), None);
    }
}
