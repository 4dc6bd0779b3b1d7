#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod image;
pub mod types;

// Individual pipeline stages – public for tools and tests, but the
// composed entry points in `detector` are the supported surface.
pub mod binarize;
pub mod classify;
pub mod regions;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + result.
pub use crate::detector::{detect_in_image, detect_meteor, DetectorParams};
pub use crate::types::DetectionResult;

// Value types crossing stage boundaries.
pub use crate::regions::Contour;
pub use crate::segments::LineSegment;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use streak_detector::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), String> {
/// let result = detect_meteor(Path::new("frame.jpg"), &DetectorParams::default())?;
/// println!("detection={}", result.is_detection());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::GrayBuffer;
    pub use crate::{detect_in_image, detect_meteor, DetectionResult, DetectorParams};
}
