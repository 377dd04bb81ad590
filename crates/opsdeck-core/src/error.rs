//! Error types and exit codes for opsdeck
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, malformed state, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the opsdeck CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, malformed state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during opsdeck operations
#[derive(Error, Debug)]
pub enum OpsdeckError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown metric: {0} (expected one of: {1})")]
    UnknownMetric(String, String),

    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl OpsdeckError {
    /// Create an error for a failed store operation
    pub fn store_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        OpsdeckError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        OpsdeckError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OpsdeckError::UnknownFormat(_)
            | OpsdeckError::UnknownMetric(..)
            | OpsdeckError::UsageError(_) => ExitCode::Usage,

            OpsdeckError::StoreNotFound { .. }
            | OpsdeckError::InvalidStore { .. }
            | OpsdeckError::AlreadyExists { .. } => ExitCode::Data,

            OpsdeckError::Io(_)
            | OpsdeckError::Json(_)
            | OpsdeckError::Toml(_)
            | OpsdeckError::FailedOperation { .. }
            | OpsdeckError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            OpsdeckError::UnknownFormat(_) => "unknown_format",
            OpsdeckError::UnknownMetric(..) => "unknown_metric",
            OpsdeckError::UsageError(_) => "usage_error",
            OpsdeckError::StoreNotFound { .. } => "store_not_found",
            OpsdeckError::InvalidStore { .. } => "invalid_store",
            OpsdeckError::AlreadyExists { .. } => "already_exists",
            OpsdeckError::Io(_) => "io_error",
            OpsdeckError::Json(_) => "json_error",
            OpsdeckError::Toml(_) => "toml_error",
            OpsdeckError::FailedOperation { .. } => "failed_operation",
            OpsdeckError::Other(_) => "other",
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

/// Result type alias for opsdeck operations
pub type Result<T> = std::result::Result<T, OpsdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_2() {
        let err = OpsdeckError::UnknownFormat("yaml".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(i32::from(err.exit_code()), 2);
    }

    #[test]
    fn store_errors_exit_3() {
        let err = OpsdeckError::StoreNotFound {
            search_root: PathBuf::from("/tmp/nowhere"),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn json_envelope_carries_type_and_code() {
        let err = OpsdeckError::Other("boom".to_string());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 1);
        assert_eq!(json["error"]["type"], "other");
        assert_eq!(json["error"]["message"], "boom");
    }
}
