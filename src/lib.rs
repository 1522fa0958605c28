//! # PSNR Compare
//!
//! Computes the Peak Signal-to-Noise Ratio between two raster images.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load       img1, img2  →  8-bit RGB grids (alpha dropped)
//! 2. Reconcile  img2        →  resampled to img1's size, only when shapes differ
//! 3. Measure    both grids  →  PSNR in dB over samples normalized to [0, 1]
//! ```
//!
//! Every stage is single-threaded and returns a [`Result`]. The first error
//! ends the run with no partial output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Decoding, RGB normalization, Lanczos3 resampling, shape reconciliation |
//! | [`metrics`] | MSE and PSNR on equally shaped grids |
//! | [`compare`] | Runs the pipeline and emits progress events |
//! | [`config`] | Input paths with their stock defaults |
//! | [`output`] | Console formatting for the report, notices and errors |
//! | [`error`] | Error taxonomy shared by every stage |
//!
//! # Example
//!
//! ```no_run
//! use psnr_compare::{CompareConfig, compare};
//!
//! # fn main() -> psnr_compare::Result<()> {
//! let config = CompareConfig::default().merge(Some("ref.png".into()), Some("out.png".into()));
//! let result = compare(&config, None)?;
//! println!("{:.4} dB", result.psnr);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod imaging;
pub mod metrics;
pub mod output;

pub use compare::{CompareEvent, Comparison, compare};
pub use config::CompareConfig;
pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod test_helpers;
