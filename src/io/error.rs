//! Error types for script execution and plane export

use std::fmt;
use std::path::PathBuf;

/// Main error type for script processing operations
#[derive(Debug)]
pub enum ScriptError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target passed on the command line cannot be processed
    InvalidTarget {
        /// The rejected target path
        path: PathBuf,
        /// Explanation of why the target is invalid
        reason: String,
    },

    /// Reading from or writing to a command stream failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the rendered plane to disk
    RenderExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A render was requested but the plane holds no lit tiles
    EmptyPlane {
        /// Path where the render would have been written
        path: PathBuf,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
            Self::RenderExport { path, source } => {
                write!(
                    f,
                    "Failed to render plane to '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyPlane { path } => {
                write!(
                    f,
                    "Nothing to render to '{}': the plane has no lit tiles",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Io { source, .. } => Some(source),
            Self::RenderExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for script processing results
pub type Result<T> = std::result::Result<T, ScriptError>;

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid target error
pub fn invalid_target(path: impl Into<PathBuf>, reason: &impl ToString) -> ScriptError {
    ScriptError::InvalidTarget {
        path: path.into(),
        reason: reason.to_string(),
    }
}
