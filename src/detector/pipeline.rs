//! The per-image detection pipeline.
//!
//! Binarize → suppress area noise → line-segment search → length
//! classification. A pure function of `(image, params)`: no state survives
//! between invocations, so independent calls need no coordination and a
//! batch driver may fan images out across worker threads freely.

use super::DetectorParams;
use crate::binarize::binarize;
use crate::classify::classify_segments;
use crate::image::{load_grayscale_image, GrayBuffer};
use crate::regions::{detect_noise_regions, fill_regions};
use crate::segments::detect_line_segments;
use crate::types::DetectionResult;
use log::debug;
use std::path::Path;

/// Run the pipeline on an image file.
///
/// Decode failures (missing, unreadable, not an image) propagate to the
/// caller; everything downstream of the decode cannot fail, only classify
/// negatively.
pub fn detect_meteor(path: &Path, params: &DetectorParams) -> Result<DetectionResult, String> {
    let gray = load_grayscale_image(path)?;
    Ok(detect_in_image(&gray, params))
}

/// Run the pipeline on an already decoded grayscale buffer.
pub fn detect_in_image(gray: &GrayBuffer, params: &DetectorParams) -> DetectionResult {
    let shape = (gray.height(), gray.width());
    debug!(
        "detect start w={} h={} threshold={}",
        gray.width(),
        gray.height(),
        params.input_threshold
    );

    let mut binary = binarize(gray, params.input_threshold, params.input_max_value);

    let noise_contours = detect_noise_regions(&binary, params.area_threshold);
    if !noise_contours.is_empty() {
        // Suppress with background so the erased regions cannot vote.
        fill_regions(&mut binary, &noise_contours, params.buffer_ratio, Some(0));
    }

    let segments = classify_segments(detect_line_segments(&binary), params.line_threshold);
    debug!(
        "detect done noise_regions={} detection={}",
        noise_contours.len(),
        segments.is_some()
    );

    DetectionResult {
        segments,
        noise_contours,
        shape,
    }
}
