//! Output records handed to the renderer.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// A labeled external link, as surfaced by `projects` and `contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Leading label, e.g. "GitHub"
    pub label: String,
    /// Link target
    pub href: String,
    /// Visible link text
    pub text: String,
}

impl Link {
    pub fn new(
        label: impl Into<String>,
        href: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Represents a single line of shell output with a unique ID
#[derive(Clone, Debug, Serialize)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OutputLineData {
    /// Echo of a submitted line with its prompt
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Command failure message
    Error(String),
    /// Informational message (ambiguous or unknown command)
    Info(String),
    /// Labeled hyperlink entry
    Link(Link),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn link(link: Link) -> Self {
        Self::new(OutputLineData::Link(link))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Text a typewriter renderer should type out character by character.
    ///
    /// Echo lines and links are always rendered at once.
    pub fn typed_text(&self) -> Option<&str> {
        match &self.data {
            OutputLineData::Text(s) | OutputLineData::Error(s) | OutputLineData::Info(s) => {
                Some(s)
            }
            OutputLineData::Command { .. } | OutputLineData::Link(_) => None,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
        assert_eq!(
            OutputLine::info("info").data,
            OutputLineData::Info("info".to_string())
        );
    }

    #[test]
    fn test_command_line() {
        let cmd = OutputLine::command("guest@portfolio:~$", "ls");
        match cmd.data {
            OutputLineData::Command { prompt, input } => {
                assert_eq!(prompt, "guest@portfolio:~$");
                assert_eq!(input, "ls");
            }
            _ => panic!("Expected Command variant"),
        }
    }

    #[test]
    fn test_typed_text() {
        assert_eq!(OutputLine::text("abc").typed_text(), Some("abc"));
        assert_eq!(OutputLine::info("hm").typed_text(), Some("hm"));
        assert_eq!(OutputLine::command("$", "ls").typed_text(), None);
        let link = OutputLine::link(Link::new("GitHub", "https://github.com/x", "github.com/x"));
        assert_eq!(link.typed_text(), None);
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_eq!(line1, line2);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(OutputLine::text("hi").data).unwrap();
        assert_eq!(json["kind"], "text");
    }
}
