//! Error types for partitioning, verification and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all region operations
#[derive(Debug)]
pub enum RegionError {
    /// A dimension, region count or CLI value is out of range
    InvalidParameters {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// More regions were requested than the grid has cells
    ///
    /// Every region needs a distinct seed cell, so no partition exists.
    UnsatisfiablePartition {
        /// Number of regions requested
        num_regions: usize,
        /// Number of cells available (`grid_size²`)
        cell_count: usize,
    },

    /// A partition failed structural verification
    InvalidPartition {
        /// Description of the violated property
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
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
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsatisfiablePartition {
                num_regions,
                cell_count,
            } => {
                write!(
                    f,
                    "Cannot partition {cell_count} cells into {num_regions} regions: \
                     each region needs its own seed cell"
                )
            }
            Self::InvalidPartition { reason } => {
                write!(f, "Invalid partition: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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

impl std::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for region results
pub type Result<T> = std::result::Result<T, RegionError>;

impl From<image::ImageError> for RegionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RegionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameters error
pub fn invalid_parameters(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RegionError {
    RegionError::InvalidParameters {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid partition error
pub fn invalid_partition(reason: &impl ToString) -> RegionError {
    RegionError::InvalidPartition {
        reason: reason.to_string(),
    }
}
