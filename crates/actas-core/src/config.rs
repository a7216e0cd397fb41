//! Run configuration for actas
//!
//! An optional TOML file naming the two paths the pipeline touches. CLI
//! arguments always take precedence over values loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ActasError, Result};

/// Paths for a grading run
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Roster input path
    pub input: Option<PathBuf>,
    /// Report output path
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ActasError::io_operation("read config", path.display(), e))?;
        toml::from_str(&raw).map_err(|e| ActasError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
