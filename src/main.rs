//! Batch CLI: screen a directory of exposures for meteor streaks.

use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use streak_detector::config::load_config;
use streak_detector::{detect_meteor, DetectorParams};

#[derive(Parser, Debug)]
#[command(
    name = "streak-detector",
    about = "Screen a directory of night-sky exposures for meteor streaks"
)]
struct Cli {
    /// Directory scanned recursively for .jpg/.jpeg files
    directory: PathBuf,

    /// Persisted configuration file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Binarization threshold (0-255)
    #[arg(long)]
    input_threshold: Option<u8>,

    /// Binarization foreground value (0-255)
    #[arg(long)]
    input_maxvalue: Option<u8>,

    /// Noise-region area gate as a fraction of the image area
    #[arg(long)]
    area_threshold: Option<f64>,

    /// Radial expansion of noise hulls before the fill
    #[arg(long)]
    buffer_ratio: Option<f64>,

    /// Minimum segment length (pixels) for a positive classification
    #[arg(long)]
    line_threshold: Option<f32>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => load_config(path)?.to_detector_params(),
        None => DetectorParams::default(),
    };
    if let Some(v) = cli.input_threshold {
        params.input_threshold = v;
    }
    if let Some(v) = cli.input_maxvalue {
        params.input_max_value = v;
    }
    if let Some(v) = cli.area_threshold {
        params.area_threshold = v;
    }
    if let Some(v) = cli.buffer_ratio {
        params.buffer_ratio = v;
    }
    if let Some(v) = cli.line_threshold {
        params.line_threshold = v;
    }

    let mut files = Vec::new();
    collect_images(&cli.directory, &mut files)?;
    files.sort();

    // Every image gets its own freshly initialized outcome slot; a failed
    // decode is recorded for that image alone and never inherits a
    // neighbor's result.
    let outcomes: Vec<Result<bool, String>> = files
        .par_iter()
        .map(|path| detect_meteor(path, &params).map(|r| r.is_detection()))
        .collect();

    let mut detected = Vec::new();
    for (path, outcome) in files.iter().zip(&outcomes) {
        match outcome {
            Ok(true) => detected.push(path),
            Ok(false) => {}
            Err(err) => eprintln!("{err}"),
        }
    }

    println!("detected: {}/{}", detected.len(), files.len());
    if !detected.is_empty() {
        println!("files:");
        for path in &detected {
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Recursively collect `.jpg`/`.jpeg` files (case-insensitive).
fn collect_images(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            collect_images(&path, out)?;
        } else if is_jpeg(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "jpg" || ext == "jpeg"
        })
        .unwrap_or(false)
}
