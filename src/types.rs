use crate::regions::Contour;
use crate::segments::LineSegment;
use serde::Serialize;

/// Outcome of one pipeline invocation for one image.
///
/// `segments == None` means the image was not classified as a detection; a
/// positive result always carries at least one qualifying segment, so an
/// empty `Some` never occurs. `noise_contours` reports the suppressed
/// regions regardless of classification, for overlay rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectionResult {
    pub segments: Option<Vec<LineSegment>>,
    pub noise_contours: Vec<Contour>,
    /// (height, width) of the processed image.
    pub shape: (usize, usize),
}

impl DetectionResult {
    /// True iff the image was classified as containing a streak.
    pub fn is_detection(&self) -> bool {
        self.segments.is_some()
    }
}
