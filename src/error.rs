//! Startup and terminal errors of the front end.

use std::io;

use termfolio_core::{ContentError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Content(#[from] ContentError),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// No `$HOME` to put the default store in
    #[error("cannot locate the home directory; pass --store <PATH> or --ephemeral")]
    NoHome,
}
