//! Error types and exit codes for actas
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing roster, invalid config)
//!
//! Data-quality problems in the roster itself are never errors: malformed
//! score text coerces to 0.0 inside the pipeline (see `score::coerce`).

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing roster, invalid config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during actas operations
#[derive(Error, Debug)]
pub enum ActasError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("no input roster given (pass INPUT or set `input` in the config file)")]
    MissingInput,

    // Data errors (exit code 3)
    #[error("roster not found: {path:?}")]
    RosterNotFound { path: PathBuf },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ActasError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ActasError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ActasError::UsageError(_) | ActasError::MissingInput => ExitCode::Usage,

            ActasError::RosterNotFound { .. } | ActasError::InvalidConfig { .. } => ExitCode::Data,

            ActasError::Io(_)
            | ActasError::Json(_)
            | ActasError::FailedOperationWithTarget { .. }
            | ActasError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ActasError::UsageError(_) => "usage_error",
            ActasError::MissingInput => "missing_input",
            ActasError::RosterNotFound { .. } => "roster_not_found",
            ActasError::InvalidConfig { .. } => "invalid_config",
            ActasError::Io(_) => "io_error",
            ActasError::Json(_) => "json_error",
            ActasError::FailedOperationWithTarget { .. } => "failed_operation",
            ActasError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for actas operations
pub type Result<T> = std::result::Result<T, ActasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ActasError::MissingInput.exit_code(), ExitCode::Usage);
        assert_eq!(
            ActasError::UsageError("bad flag".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ActasError::RosterNotFound {
                path: PathBuf::from("notas.csv")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ActasError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = ActasError::RosterNotFound {
            path: PathBuf::from("missing.csv"),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "roster_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("missing.csv"));
    }
}
