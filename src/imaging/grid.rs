//! In-memory pixel grid shared by every pipeline stage.
//!
//! An [`ImageGrid`] is always 8-bit, three-channel RGB laid out row-major as
//! `height × width × 3`. Whatever the source file's color type, the loader
//! converts it before a grid is built, so downstream code never branches on
//! channel count.

use image::RgbImage;
use std::fmt;

/// Number of channels in every grid.
pub const RGB_CHANNELS: usize = 3;

/// Grid dimensions in `(height, width, channels)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: u32,
    pub width: u32,
    pub channels: usize,
}

impl Shape {
    /// RGB shape for the given height and width.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            channels: RGB_CHANNELS,
        }
    }

    /// True when either spatial dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of samples (`height * width * channels`).
    pub fn sample_count(&self) -> usize {
        self.height as usize * self.width as usize * self.channels
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// A decoded image normalized to 8-bit RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    pixels: RgbImage,
}

impl ImageGrid {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    /// Raw interleaved samples, row-major.
    pub fn samples(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Samples cast to `f64` and scaled into `[0, 1]`.
    pub fn normalized(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples().iter().map(|&v| f64::from(v) / 255.0)
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_rgb(self) -> RgbImage {
        self.pixels
    }

    /// Grid of a single solid color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::from(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    /// Grid whose pixel at `(x, y)` is produced by `f`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        Self::from(RgbImage::from_fn(width, height, |x, y| image::Rgb(f(x, y))))
    }
}

impl From<RgbImage> for ImageGrid {
    fn from(pixels: RgbImage) -> Self {
        Self { pixels }
    }
}
