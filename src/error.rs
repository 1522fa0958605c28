//! Error taxonomy for the comparison pipeline.
//!
//! Every stage returns [`Result`] and propagates with `?`; only `main`
//! turns an [`Error`] into console output and an exit status.

use crate::imaging::Shape;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist on disk.
    #[error("Image not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Path exists but its content is not a decodable raster image.
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A grid with zero width or height reached a stage that needs pixels.
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Calculator invoked on grids of different shape.
    #[error("Image shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: Shape, actual: Shape },

    /// Path exists but could not be opened or read (directory, permissions, ...).
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
