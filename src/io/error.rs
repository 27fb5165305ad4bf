//! Error types for record loading, generation, and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A record file could not be parsed as JSON
    RecordParse {
        /// Path to the record file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A finished puzzle could not be encoded for export
    DocumentEncode {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordParse { path, source } => {
                write!(f, "Failed to parse records '{}': {source}", path.display())
            }
            Self::DocumentEncode { source } => {
                write!(f, "Failed to encode puzzle document: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RecordParse { source, .. } | Self::DocumentEncode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        Self::RecordParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a target validation error for the CLI
pub fn target_error(path: &std::path::Path, reason: &'static str) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter: "target",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
