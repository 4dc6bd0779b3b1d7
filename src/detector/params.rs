//! Parameters read by the detection pipeline.

/// Per-invocation pipeline parameters. Plain values, owned by the caller;
/// the pipeline only reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorParams {
    /// Binarization threshold; samples strictly above become foreground.
    pub input_threshold: u8,
    /// Foreground value written by the binarizer.
    pub input_max_value: u8,
    /// Noise-region gate: contour area over image area, in (0, 1].
    pub area_threshold: f64,
    /// Radial expansion (>1) or shrink (<1) of each noise hull before fill.
    pub buffer_ratio: f64,
    /// Minimum Euclidean segment length for a positive classification.
    pub line_threshold: f32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            input_threshold: 127,
            input_max_value: 255,
            area_threshold: 0.0001,
            buffer_ratio: 1.1,
            line_threshold: 100.0,
        }
    }
}
