//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so log output only goes to a file.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::{BowlError, Result};

/// Opens `path` for appending, creating it if needed.
///
/// # Errors
///
/// Returns [`BowlError::Io`] if the file cannot be opened.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BowlError::Io(format!("failed to open log file {}: {e}", path.display())))
}

/// Installs the global `fmt` subscriber writing to `log_file`.
///
/// Does nothing when `log_file` is `None`. Returns whether logging was
/// enabled.
///
/// # Errors
///
/// Returns [`BowlError::Io`] if the file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| BowlError::Io(format!("failed to install tracing subscriber: {e}")))?;
    Ok(true)
}
