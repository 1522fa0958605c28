//! Image loading and shape reconciliation — pure Rust, via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **RGB normalization** | `DynamicImage::to_rgb8`, alpha dropped |
//! | **Resample** | `imageops::resize` with Lanczos3 |
//!
//! The module is split into:
//! - **Grid**: [`ImageGrid`] and [`Shape`], the data every stage passes on
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`load_grid`] and [`reconcile`], the checks shared by all backends

pub mod backend;
mod grid;
pub mod operations;
pub mod rust_backend;

pub use backend::ImageBackend;
pub use grid::{ImageGrid, RGB_CHANNELS, Shape};
pub use operations::{load_grid, reconcile};
pub use rust_backend::RustBackend;
