//! Length-based classification of detected segments.

use crate::segments::LineSegment;

/// Decide whether the segment list amounts to a detection.
///
/// Negative when `segments` is absent or empty, or when no segment is
/// strictly longer than `line_threshold`. Positive results carry exactly the
/// subset with length strictly greater than the threshold; a segment at
/// exactly the threshold is excluded, matching the strict comparison of the
/// area filter.
pub fn classify_segments(
    segments: Option<Vec<LineSegment>>,
    line_threshold: f32,
) -> Option<Vec<LineSegment>> {
    let segments = segments?;
    let max_length = segments
        .iter()
        .map(LineSegment::length)
        .fold(f32::NEG_INFINITY, f32::max);
    if max_length > line_threshold {
        Some(
            segments
                .into_iter()
                .filter(|s| s.length() > line_threshold)
                .collect(),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::classify_segments;
    use crate::segments::LineSegment;

    fn horizontal(len: f32) -> LineSegment {
        LineSegment::new([0.0, 0.0], [len, 0.0])
    }

    #[test]
    fn absent_or_empty_list_is_negative() {
        assert_eq!(classify_segments(None, 10.0), None);
        assert_eq!(classify_segments(Some(Vec::new()), 10.0), None);
    }

    #[test]
    fn max_below_threshold_is_negative() {
        let segs = vec![horizontal(50.0), horizontal(80.0)];
        assert_eq!(classify_segments(Some(segs), 100.0), None);
    }

    #[test]
    fn exactly_at_threshold_is_negative() {
        let segs = vec![horizontal(100.0)];
        assert_eq!(classify_segments(Some(segs), 100.0), None);
    }

    #[test]
    fn positive_result_keeps_only_qualifying_segments() {
        let segs = vec![horizontal(50.0), horizontal(150.0), horizontal(100.0)];
        let kept = classify_segments(Some(segs), 100.0).expect("one segment qualifies");
        assert_eq!(kept, vec![horizontal(150.0)]);
    }
}
