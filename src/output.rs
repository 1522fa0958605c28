//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Report
//!
//! ```text
//!
//! ==================================================
//! Image 1: img/reference.png
//! Image 2: result/candidate.png
//! ==================================================
//! PSNR: 31.4159 dB
//! ==================================================
//!
//! ```
//!
//! Identical images print `PSNR: inf dB`.
//!
//! ## Resampling notice
//!
//! ```text
//! Warning: Image shapes are different. Resizing...
//! Image 1 shape: (480, 640, 3)
//! Image 2 shape: (240, 320, 3)
//! ```
//!
//! ## Failure
//!
//! ```text
//! Error: Image not found: missing.png
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::compare::{CompareEvent, Comparison};
use std::fmt::Display;

const SEPARATOR_WIDTH: usize = 50;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Format the success report, including the leading and trailing blank lines.
pub fn format_report(comparison: &Comparison) -> Vec<String> {
    vec![
        String::new(),
        separator(),
        format!("Image 1: {}", comparison.img1.display()),
        format!("Image 2: {}", comparison.img2.display()),
        separator(),
        format!("PSNR: {:.4} dB", comparison.psnr),
        separator(),
        String::new(),
    ]
}

pub fn print_report(comparison: &Comparison) {
    for line in format_report(comparison) {
        println!("{}", line);
    }
}

/// Format a pipeline event as display lines.
pub fn format_compare_event(event: &CompareEvent) -> Vec<String> {
    match event {
        CompareEvent::Resampling {
            reference,
            candidate,
        } => vec![
            "Warning: Image shapes are different. Resizing...".to_string(),
            format!("Image 1 shape: {}", reference),
            format!("Image 2 shape: {}", candidate),
        ],
    }
}

pub fn print_compare_event(event: &CompareEvent) {
    for line in format_compare_event(event) {
        println!("{}", line);
    }
}

/// Single-line failure message.
pub fn format_error(err: &impl Display) -> String {
    format!("Error: {}", err)
}

pub fn print_error(err: &impl Display) {
    println!("{}", format_error(err));
}
