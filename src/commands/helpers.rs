//! Shared helpers for command implementations

use std::fs;
use std::path::Path;

use actas_core::error::{ActasError, Result};

/// Read the roster file fully before any computation starts.
pub fn read_roster(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ActasError::RosterNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path)
        .map_err(|e| ActasError::io_operation("read roster", path.display(), e))
}
