//! Pure Rust backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, BMP, GIF, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Color normalization | `DynamicImage::to_rgb8` (alpha dropped, 16-bit scaled down) |
//! | Resample | `image::imageops::resize` with `Lanczos3` filter |

use super::backend::ImageBackend;
use super::grid::ImageGrid;
use crate::error::{Error, Result};
use image::ImageReader;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Filter used whenever a grid has to change size.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Backend using the `image` crate decoders and resampler.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<ImageGrid> {
        // Sniff the header first so a mislabelled extension still decodes.
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let img = ImageReader::open(path)
            .map_err(io_error)?
            .with_guessed_format()
            .map_err(io_error)?
            .decode()
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "decoded {} as {:?} ({}x{})",
            path.display(),
            img.color(),
            img.width(),
            img.height()
        );

        // Alpha is discarded here, not composited over a background.
        Ok(ImageGrid::from(img.to_rgb8()))
    }

    fn resample(&self, grid: &ImageGrid, width: u32, height: u32) -> Result<ImageGrid> {
        log::debug!(
            "resampling {}x{} -> {}x{} ({:?})",
            grid.width(),
            grid.height(),
            width,
            height,
            RESAMPLE_FILTER
        );
        let resized = imageops::resize(grid.as_rgb(), width, height, RESAMPLE_FILTER);
        Ok(ImageGrid::from(resized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{gradient_grid, write_png};
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn load_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        let grid = gradient_grid(20, 15);
        write_png(&path, &grid);

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn load_drops_alpha_without_compositing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("transparent.png");
        RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded, ImageGrid::filled(4, 4, [10, 20, 30]));
    }

    #[test]
    fn load_expands_grayscale_to_rgb() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gray.png");
        GrayImage::from_pixel(3, 2, Luma([100])).save(&path).unwrap();

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded.shape().channels, 3);
        assert_eq!(loaded, ImageGrid::filled(3, 2, [100, 100, 100]));
    }

    #[test]
    fn load_sniffs_format_despite_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-png.jpg");
        write_png(&path, &ImageGrid::filled(5, 5, [7, 8, 9]));

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded, ImageGrid::filled(5, 5, [7, 8, 9]));
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = RustBackend::new().load(&path).unwrap_err();
        assert!(matches!(&err, Error::Decode { path: p, .. } if p == &path));
    }

    #[test]
    fn load_nonexistent_file_errors() {
        let result = RustBackend::new().load(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn load_directory_is_io_error_naming_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("folder.png");
        std::fs::create_dir(&path).unwrap();

        let err = RustBackend::new().load(&path).unwrap_err();
        assert!(matches!(&err, Error::Io { path: p, .. } if p == &path));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn resample_hits_exact_target_size() {
        let grid = gradient_grid(50, 50);
        let out = RustBackend::new().resample(&grid, 100, 100).unwrap();
        assert_eq!(out.shape(), crate::imaging::Shape::new(100, 100));
    }

    #[test]
    fn resample_ignores_aspect_ratio() {
        let grid = gradient_grid(40, 10);
        let out = RustBackend::new().resample(&grid, 13, 29).unwrap();
        assert_eq!((out.width(), out.height()), (13, 29));
    }
}
