//! Full-reference quality metrics on normalized grids.
//!
//! All functions here are pure: they read two grids, never mutate them, and
//! give the same answer for the same input.
//!
//! Samples are normalized into `[0, 1]` (divide by 255) before any
//! arithmetic, so the peak signal is [`DATA_RANGE`] rather than 255.

use crate::error::{Error, Result};
use crate::imaging::ImageGrid;

/// Peak signal value for samples normalized into `[0, 1]`.
pub const DATA_RANGE: f64 = 1.0;

fn check_comparable(a: &ImageGrid, b: &ImageGrid) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            expected: a.shape(),
            actual: b.shape(),
        });
    }
    if a.shape().is_empty() {
        return Err(Error::InvalidDimensions {
            width: a.width(),
            height: a.height(),
        });
    }
    Ok(())
}

/// Mean over every `(row, col, channel)` of the squared normalized difference.
///
/// # Errors
/// [`Error::ShapeMismatch`] when the grids differ in shape, and
/// [`Error::InvalidDimensions`] when both are empty.
pub fn mean_squared_error(a: &ImageGrid, b: &ImageGrid) -> Result<f64> {
    check_comparable(a, b)?;

    let sum: f64 = a
        .normalized()
        .zip(b.normalized())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sum / a.shape().sample_count() as f64)
}

/// Peak signal-to-noise ratio in decibels.
///
/// `10 * log10(data_range² / MSE)`, or `f64::INFINITY` for identical grids.
///
/// # Examples
/// ```
/// # use psnr_compare::imaging::ImageGrid;
/// # use psnr_compare::metrics::{peak_signal_noise_ratio, DATA_RANGE};
/// let black = ImageGrid::filled(4, 4, [0, 0, 0]);
/// let white = ImageGrid::filled(4, 4, [255, 255, 255]);
///
/// assert_eq!(peak_signal_noise_ratio(&black, &black, DATA_RANGE).unwrap(), f64::INFINITY);
/// assert_eq!(peak_signal_noise_ratio(&black, &white, DATA_RANGE).unwrap(), 0.0);
/// ```
pub fn peak_signal_noise_ratio(a: &ImageGrid, b: &ImageGrid, data_range: f64) -> Result<f64> {
    let mse = mean_squared_error(a, b)?;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (data_range * data_range / mse).log10())
}
