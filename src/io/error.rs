//! Error types for stitching operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Input directory does not exist or is not a directory
    DirectoryNotFound {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// A candidate tile file could not be decoded as an image
    TileDecode {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or write the assembled canvas
    CanvasExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Grid layout parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryNotFound { path } => {
                write!(f, "directory not found - '{}'", path.display())
            }
            Self::TileDecode { path, source } => {
                write!(f, "failed to decode tile '{}': {source}", path.display())
            }
            Self::CanvasExport { path, source } => {
                write!(
                    f,
                    "failed to save map image to '{}': {source}",
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
                    "file system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileDecode { source, .. } | Self::CanvasExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<image::ImageError> for StitchError {
    fn from(err: image::ImageError) -> Self {
        Self::TileDecode {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
