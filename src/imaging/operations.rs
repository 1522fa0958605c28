//! High-level image operations.
//!
//! These functions wrap backend calls with the checks every backend must
//! share: file existence before decoding, dimension validation and shape
//! comparison before resampling.

use super::backend::ImageBackend;
use super::grid::ImageGrid;
use crate::compare::CompareEvent;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::mpsc::Sender;

/// Load an image file as an RGB grid.
///
/// Missing paths fail with [`Error::FileNotFound`] before the backend is
/// asked to decode anything.
pub fn load_grid(backend: &impl ImageBackend, path: &Path) -> Result<ImageGrid> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let grid = backend.load(path)?;
    log::debug!("loaded {} with shape {}", path.display(), grid.shape());
    Ok(grid)
}

/// Bring `candidate` to the same width and height as `reference`.
///
/// Equal shapes hand the candidate back untouched and never call the
/// backend. Otherwise a [`CompareEvent::Resampling`] is sent with both
/// original shapes and the candidate is resampled to the reference size.
/// The reference is only read.
pub fn reconcile(
    backend: &impl ImageBackend,
    reference: &ImageGrid,
    candidate: ImageGrid,
    events: Option<&Sender<CompareEvent>>,
) -> Result<ImageGrid> {
    for grid in [reference, &candidate] {
        if grid.shape().is_empty() {
            return Err(Error::InvalidDimensions {
                width: grid.width(),
                height: grid.height(),
            });
        }
    }

    if reference.shape() == candidate.shape() {
        return Ok(candidate);
    }

    if let Some(tx) = events {
        tx.send(CompareEvent::Resampling {
            reference: reference.shape(),
            candidate: candidate.shape(),
        })
        .ok();
    }

    backend.resample(&candidate, reference.width(), reference.height())
}
