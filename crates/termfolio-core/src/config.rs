//! Core configuration constants.

use std::time::Duration;

// =============================================================================
// Namespace
// =============================================================================

/// Name of the namespace root (the "home" directory).
pub const ROOT_NAME: &str = "~";

// =============================================================================
// Prompt
// =============================================================================

/// User shown in the prompt.
pub const PROMPT_USER: &str = "guest";

/// Host shown in the prompt.
pub const PROMPT_HOST: &str = "portfolio";

// =============================================================================
// Output
// =============================================================================

/// Delay between characters when typewriter output is enabled.
pub const TYPEWRITER_DELAY: Duration = Duration::from_millis(8);

// =============================================================================
// Persisted State
// =============================================================================

/// Store keys for persisted session state.
///
/// Every key lives under the `term.` namespace; values are JSON encoded.
pub mod store_keys {
    pub const HISTORY: &str = "term.history";
    pub const TYPEWRITER: &str = "term.typewriter";
    pub const BANNER: &str = "term.banner";
    pub const BACKGROUND: &str = "term.bg";
    pub const THEME: &str = "term.theme";
}
