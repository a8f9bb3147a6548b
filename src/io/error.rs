//! Error types for grid, atlas and mesh operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all terrain operations
#[derive(Debug)]
pub enum TerrainError {
    /// Grid or preview dimension is zero, non-positive or too large to build
    InvalidDimension {
        /// Name of the rejected dimension
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
    },

    /// Index outside the valid range of a cell axis or the atlas regions
    IndexOutOfRange {
        /// What was being indexed
        collection: &'static str,
        /// The rejected index
        index: usize,
        /// Number of valid entries
        len: usize,
    },

    /// Sub-image pixel rectangle does not fit inside the atlas image
    OutOfBounds {
        /// Requested rectangle as `[x, y, width, height]` with a bottom-left origin
        rect: [i64; 4],
        /// Source image dimensions (width, height)
        image: (u32, u32),
    },

    /// Operation needs at least one atlas region
    AtlasEmpty {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Atlas source image has not been set
    MissingImage {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

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

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(f, "Invalid dimension '{parameter}' = '{value}'")
            }
            Self::IndexOutOfRange {
                collection,
                index,
                len,
            } => {
                write!(f, "{collection} index {index} is out of range (len: {len})")
            }
            Self::OutOfBounds { rect, image } => {
                write!(
                    f,
                    "Pixel rectangle at ({}, {}) sized {}x{} exceeds image {}x{}",
                    rect[0], rect[1], rect[2], rect[3], image.0, image.1
                )
            }
            Self::AtlasEmpty { operation } => {
                write!(f, "Atlas has no regions for {operation}")
            }
            Self::MissingImage { operation } => {
                write!(f, "Atlas image is not set for {operation}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for terrain results
pub type Result<T> = std::result::Result<T, TerrainError>;

impl From<std::io::Error> for TerrainError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(parameter: &'static str, value: &impl ToString) -> TerrainError {
    TerrainError::InvalidDimension {
        parameter,
        value: value.to_string(),
    }
}

/// Create an index out of range error
pub const fn index_out_of_range(collection: &'static str, index: usize, len: usize) -> TerrainError {
    TerrainError::IndexOutOfRange {
        collection,
        index,
        len,
    }
}
