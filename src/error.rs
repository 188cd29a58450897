//! Error type for input validation, configuration and file loading.
//!
//! Failing to find a curve is not an error: extraction entry points return an
//! empty point list for that case.

use std::path::PathBuf;

/// Errors raised before or around the extraction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A flat pixel buffer does not match the declared dimensions.
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Multi-channel buffers must have 1 to 4 channels.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    /// A flat `[x0, y0, x1, y1, ...]` list has a dangling coordinate.
    #[error("flat point list must have an even length, got {0}")]
    OddCoordinateCount(usize),

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a file from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The image file could not be decoded.
    #[cfg(feature = "image")]
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
