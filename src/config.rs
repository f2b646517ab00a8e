//! Application configuration.
//!
//! Centralizes the constants of the terminal front end.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Bundled site content: profile and filesystem manifest.
pub const SITE_JSON: &str = include_str!("../assets/site.json");

/// ASCII banner shown at startup while the banner setting is on.
pub const ASCII_BANNER: &str = include_str!("../assets/banner.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used in diagnostics.
pub const APP_NAME: &str = "termfolio";

/// Welcome text after the banner.
pub const WELCOME_HINT: &str = "Type 'help' to see available commands.";

// =============================================================================
// Persistence
// =============================================================================

/// File name of the settings store inside the home directory.
pub const STORE_FILE_NAME: &str = ".termfolio.json";
