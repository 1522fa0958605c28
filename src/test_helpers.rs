//! Shared test utilities: deterministic grid builders and fixture writers.

use crate::imaging::ImageGrid;
use std::path::Path;

// =========================================================================
// Grid builders
// =========================================================================

/// Deterministic textured grid with every sample in `64..192`.
///
/// The headroom on both sides lets [`offset_noise`] add up to ±63 without
/// clipping, so the error it introduces is exact.
pub fn gradient_grid(width: u32, height: u32) -> ImageGrid {
    ImageGrid::from_fn(width, height, |x, y| {
        [
            64 + ((x * 7 + y * 3) % 128) as u8,
            64 + ((x * 5) % 128) as u8,
            64 + ((y * 11) % 128) as u8,
        ]
    })
}

/// Copy of `grid` with every sample shifted by `magnitude`, alternating sign.
pub fn offset_noise(grid: &ImageGrid, magnitude: u8) -> ImageGrid {
    let mut rgb = grid.clone().into_rgb();
    for (i, sample) in rgb.iter_mut().enumerate() {
        *sample = if i % 2 == 0 {
            sample.saturating_add(magnitude)
        } else {
            sample.saturating_sub(magnitude)
        };
    }
    ImageGrid::from(rgb)
}

// =========================================================================
// Fixture writers
// =========================================================================

/// Write `grid` to `path` as an RGB PNG.
pub fn write_png(path: &Path, grid: &ImageGrid) {
    grid.as_rgb()
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
}
