//! Error types for grid generation and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Per-row start-number count does not match the configured row count
    ///
    /// Raised during validation, before any geometry is computed, so a
    /// rejected grid never produces partial output.
    StartNumberMismatch {
        /// Configured number of rows
        rows: usize,
        /// Number of start numbers supplied
        start_numbers: usize,
    },

    /// Project file contained invalid JSON or an unexpected shape
    ProjectParse {
        /// Path to the project file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
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

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNumberMismatch {
                rows,
                start_numbers,
            } => {
                write!(
                    f,
                    "start_numbers length {start_numbers} does not match row count {rows}"
                )
            }
            Self::ProjectParse { path, source } => {
                write!(
                    f,
                    "Failed to parse project file '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProjectParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::StartNumberMismatch { .. } => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;
