//! Image backend trait.
//!
//! The [`ImageBackend`] trait names the two capabilities the pipeline needs
//! from an imaging library: decode a file into an [`ImageGrid`], and resample
//! a grid to an exact size with a high-quality filter.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so reconciliation logic can be
//! checked without touching the filesystem.

use super::grid::ImageGrid;
use crate::error::Result;
use std::path::Path;

/// Trait for image backends.
///
/// Implementations only deal with decoding and resampling. Existence checks,
/// dimension validation and event reporting live in
/// [`operations`](super::operations) so every backend behaves the same.
pub trait ImageBackend {
    /// Decode the file at `path` into an 8-bit RGB grid, dropping any alpha.
    fn load(&self, path: &Path) -> Result<ImageGrid>;

    /// Resample `grid` to exactly `width × height`.
    fn resample(&self, grid: &ImageGrid, width: u32, height: u32) -> Result<ImageGrid>;
}
