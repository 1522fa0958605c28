//! Comparison pipeline: load both images, reconcile shapes, compute PSNR.
//!
//! ```text
//! load(img1) → load(img2) → reconcile (only on shape mismatch) → PSNR
//! ```
//!
//! The run is all-or-nothing. The first error from any stage is returned
//! as is and nothing downstream runs. Progress notices go out as
//! [`CompareEvent`]s on an optional channel, so the library never writes to
//! the console itself.

use crate::config::CompareConfig;
use crate::error::Result;
use crate::imaging::{ImageBackend, RustBackend, Shape, load_grid, reconcile};
use crate::metrics::{DATA_RANGE, peak_signal_noise_ratio};
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Notices emitted while the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    /// The second image is about to be resampled to the first image's size.
    Resampling { reference: Shape, candidate: Shape },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub img1: PathBuf,
    pub img2: PathBuf,
    /// PSNR in dB; `f64::INFINITY` when the images are identical.
    pub psnr: f64,
}

pub fn compare(config: &CompareConfig, events: Option<Sender<CompareEvent>>) -> Result<Comparison> {
    compare_with_backend(&RustBackend::new(), config, events)
}

/// Run the pipeline with a specific backend (allows testing with mock).
pub fn compare_with_backend(
    backend: &impl ImageBackend,
    config: &CompareConfig,
    events: Option<Sender<CompareEvent>>,
) -> Result<Comparison> {
    let reference = load_grid(backend, &config.img1_path)?;
    let candidate = load_grid(backend, &config.img2_path)?;

    let candidate = reconcile(backend, &reference, candidate, events.as_ref())?;
    let psnr = peak_signal_noise_ratio(&reference, &candidate, DATA_RANGE)?;
    log::debug!("psnr = {psnr} dB over shape {}", reference.shape());

    Ok(Comparison {
        img1: config.img1_path.clone(),
        img2: config.img2_path.clone(),
        psnr,
    })
}
