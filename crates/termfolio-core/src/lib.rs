//! Core of the termfolio portfolio shell.
//!
//! This crate provides:
//! - [`NamespaceTree`] and [`resolve_path`] for the read-only virtual filesystem
//! - [`Command`] and [`resolve_command`] for exact and unique-prefix lookup
//! - [`Interpreter`] turning a submitted line into output records
//! - [`LineEditor`], [`History`] and the [`autocomplete`] helpers
//! - [`Session`] state persisted through a [`KeyValueStore`]
//! - [`Typewriter`], a steppable character reveal for renderers
//!
//! Rendering and durability are left to the front end: the core emits
//! [`models::OutputLine`] records plus [`Effect`]s and reads and writes
//! settings through whatever store it is given.

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod interpreter;
pub mod models;
pub mod namespace;
pub mod path;
pub mod session;
pub mod shell;
pub mod store;
pub mod typewriter;

pub use commands::{Command, CommandResult, Effect, Resolution, resolve_command};
pub use editor::{Key, LineEditor};
pub use error::{ContentError, PathError, ShellError, StoreError};
pub use history::History;
pub use interpreter::{Interpreter, Submission};
pub use namespace::NamespaceTree;
pub use path::{WorkingPath, resolve_path};
pub use session::{Session, SessionOptions};
pub use shell::{KeyOutcome, Shell};
pub use store::{KeyValueStore, MemoryStore};
pub use typewriter::{Tick, Typewriter};
