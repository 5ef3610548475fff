//! Error types for tiling, blending, and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling and reassembly operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input raster is missing or malformed
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Image too small to hold even one overlapped tile
    GridTooSmall {
        /// Normalized image width in pixels
        width: usize,
        /// Normalized image height in pixels
        height: usize,
        /// Requested tile size in pixels
        tile_size: usize,
        /// Size unit granularity in pixels
        size_unit: usize,
    },

    /// Tile geometry exceeds the source image bounds
    ///
    /// Indicates an internal consistency violation: descriptors produced by
    /// the planner always lie within the image they were planned for.
    OutOfBounds {
        /// Traversal index of the offending tile
        index: usize,
        /// Tile rectangle as (x, y, width, height)
        rect: (usize, usize, usize, usize),
        /// Image dimensions as (width, height)
        bounds: (usize, usize),
    },

    /// Parameter validation failed
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile set cardinality or dimensions inconsistent with the grid plan
    ShapeMismatch {
        /// What the grid plan requires
        expected: String,
        /// What was actually supplied
        actual: String,
    },

    /// Reassembly observed a set cancellation token
    Cancelled,

    /// Failed to save an image to disk
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

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input image: {reason}")
            }
            Self::GridTooSmall {
                width,
                height,
                tile_size,
                size_unit,
            } => {
                write!(
                    f,
                    "Image {width}x{height} too small for tile size {tile_size} at unit {size_unit}"
                )
            }
            Self::OutOfBounds {
                index,
                rect,
                bounds,
            } => {
                write!(
                    f,
                    "Tile {index} at ({}, {}) sized {}x{} exceeds image bounds {}x{}",
                    rect.0, rect.1, rect.2, rect.3, bounds.0, bounds.1
                )
            }
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "Tile set mismatch: expected {expected}, got {actual}")
            }
            Self::Cancelled => {
                write!(f, "Reassembly cancelled before completion")
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

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &str) -> TilingError {
    TilingError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_config(parameter: &'static str, value: &impl ToString, reason: &str) -> TilingError {
    TilingError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tile set mismatch error
pub fn shape_mismatch(expected: &str, actual: &str) -> TilingError {
    TilingError::ShapeMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}
