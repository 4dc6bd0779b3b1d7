//! Voting-based line-segment search.
//!
//! A progressive probabilistic Hough transform over the binary image:
//! foreground points are consumed in a shuffled order, each point votes for
//! every discretized line orientation through it, and once an accumulator
//! cell reaches the vote threshold the corresponding line is walked in both
//! directions, tolerating small gaps, to recover a concrete segment. Pixels
//! swallowed by an accepted walk retract their votes so one bright streak
//! yields one segment instead of a fan of near-duplicates.
//!
//! The shuffle uses a fixed seed, so results are reproducible for a given
//! image. Tuning is internal and not user-configurable; only the downstream
//! length classification is exposed as a parameter.

mod hough;
mod segment;

pub use segment::LineSegment;

use crate::image::GrayBuffer;

/// Angular resolution of the accumulator.
pub(crate) const THETA_STEP: f64 = std::f64::consts::PI / 180.0;
/// Votes required before a cell spawns a segment walk.
pub(crate) const VOTE_THRESHOLD: i32 = 200;
/// Minimum accepted segment extent in pixels (per-axis).
pub(crate) const MIN_LINE_LENGTH: i32 = 20;
/// Maximum run of background pixels bridged within one segment.
pub(crate) const MAX_LINE_GAP: i32 = 3;

/// Detect straight foreground segments in a binary image.
///
/// Returns `None` when no candidate passes the internal vote threshold,
/// which is distinct from an empty-but-present list: a `Some` always holds
/// at least one segment.
pub fn detect_line_segments(img: &GrayBuffer) -> Option<Vec<LineSegment>> {
    let segments = hough::probabilistic_hough(img);
    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

#[cfg(test)]
mod tests;
