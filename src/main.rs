use clap::Parser;
use psnr_compare::{CompareConfig, compare, output};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

/// Calculate PSNR between two images
#[derive(Parser)]
#[command(name = "psnr-compare")]
#[command(version)]
#[command(long_about = "\
Calculate PSNR between two images

Both images are decoded and converted to 8-bit RGB (alpha is dropped). If
their sizes differ, the second image is resampled to the first image's size
with a Lanczos3 filter before comparison. Samples are normalized to [0, 1],
so identical images report `inf` and black vs. white reports 0 dB.

Set RUST_LOG=debug to trace decoding and resampling on stderr.")]
struct Cli {
    /// Path to first (reference) image [default: ./img/d[0048]TopBF1.png]
    #[arg(long, value_name = "PATH")]
    img1: Option<PathBuf>,

    /// Path to second image [default: ./result/result_2024-05-12T21-21-24_new.png]
    #[arg(long, value_name = "PATH")]
    img2: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CompareConfig::default().merge(cli.img1, cli.img2);

    let (tx, rx) = mpsc::channel();
    let result = compare(&config, Some(tx));
    for event in rx {
        output::print_compare_event(&event);
    }

    match result {
        Ok(comparison) => {
            output::print_report(&comparison);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("comparison failed: {err:?}");
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
