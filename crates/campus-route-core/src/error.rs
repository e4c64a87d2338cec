//! Error types and exit codes for campus-route
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown location, invalid map, vertex out of range)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the campus-route binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, malformed map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a map or routing over it
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex index {vertex} out of range in {operation} (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        operation: String,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("invalid campus map: {reason}")]
    InvalidMap { reason: String },

    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    #[error("campus map is empty or not loaded ({path:?})")]
    EmptyMap { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a vertex id outside `[0, vertex_count)`
    pub fn vertex_out_of_range(operation: &str, vertex: usize, vertex_count: usize) -> Self {
        RouteError::VertexOutOfRange {
            operation: operation.to_string(),
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a malformed map file
    pub fn invalid_map(reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidMap {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a location name that does not resolve to an id
    pub fn unknown_location(name: impl Into<String>) -> Self {
        RouteError::UnknownLocation { name: name.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::VertexOutOfRange { .. }
            | RouteError::InvalidMap { .. }
            | RouteError::UnknownLocation { .. }
            | RouteError::EmptyMap { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperationWithTarget { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::VertexOutOfRange { .. } => "vertex_out_of_range",
            RouteError::InvalidMap { .. } => "invalid_map",
            RouteError::UnknownLocation { .. } => "unknown_location",
            RouteError::EmptyMap { .. } => "empty_map",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RouteError::Other(_) => "other",
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

/// Result type alias for campus-route operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_out_of_range_message() {
        let err = RouteError::vertex_out_of_range("add_edge", 7, 3);
        assert_eq!(
            err.to_string(),
            "vertex index 7 out of range in add_edge (graph has 3 vertices)"
        );
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RouteError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RouteError::unknown_location("Library").exit_code(),
            ExitCode::Data
        );
        assert_eq!(RouteError::Other("x".into()).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let json = RouteError::unknown_location("Gym").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_location");
        assert_eq!(json["error"]["message"], "unknown location: Gym");
    }
}
