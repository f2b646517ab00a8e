//! Data models shared between the core and its front ends.
//!
//! Contains domain types for:
//! - [`OutputLine`], [`Link`] - Output records for the renderer
//! - [`SessionSettings`], [`Theme`], [`Background`] - Persisted presentation settings
//! - [`Profile`], [`Manifest`], [`SiteContent`] - Static content data source

mod content;
mod output;
mod settings;

pub use content::{DirectoryEntry, FileEntry, Manifest, Profile, SiteContent};
pub use output::{Link, OutputLine, OutputLineData};
pub use settings::{Background, SessionSettings, Theme, UnknownOption};
