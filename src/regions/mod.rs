//! Area-based noise suppression.
//!
//! Large bright blobs (clouds, the moon, overexposed patches) otherwise
//! shed many short edge responses that pollute the line search. This module
//! finds foreground regions whose area exceeds a fraction of the image area
//! and erases a buffered convex envelope of each:
//!
//! - **Detection**: trace outer boundaries of 8-connected foreground
//!   regions, keep contours with `area / image_area > area_threshold`
//!   (strict).
//! - **Fill**: per contour, convex hull → area-weighted centroid → scale the
//!   hull vertices radially by the buffer ratio → clamp into the image
//!   rectangle → scanline-fill with the requested color, in place. Hulls
//!   with zero enclosed area are skipped, never divided by.
//!
//! Fine streaks just outside a suppressed region survive; only the buffered
//! envelope is erased.

mod contours;
mod fill;
mod hull;

pub use contours::{extract_contours, Contour};
pub use fill::fill_polygon;
pub use hull::{buffered_vertices, clamp, convex_hull, polygon_centroid};

use crate::image::GrayBuffer;
use log::debug;

/// Contours whose enclosed area exceeds `area_threshold` of the image area.
///
/// The comparison is strictly greater; a region at exactly the threshold is
/// not retained. Order follows raster discovery order.
pub fn detect_noise_regions(img: &GrayBuffer, area_threshold: f64) -> Vec<Contour> {
    let image_area = (img.width() * img.height()) as f64;
    if image_area == 0.0 {
        return Vec::new();
    }
    let contours = extract_contours(img);
    let total = contours.len();
    let retained: Vec<Contour> = contours
        .into_iter()
        .filter(|c| c.area() / image_area > area_threshold)
        .collect();
    debug!(
        "detect_noise_regions: {}/{} contours above area ratio {}",
        retained.len(),
        total,
        area_threshold
    );
    retained
}

/// Erase each contour's buffered convex envelope, mutating `img` in place.
///
/// `color = None` fills with the image's median intensity (the standalone
/// erase/visualization path); the detection pipeline passes `Some(0)` to
/// suppress regions from the line search. Contours whose hull collapses to
/// zero area are skipped.
pub fn fill_regions(
    img: &mut GrayBuffer,
    contours: &[Contour],
    buffer_ratio: f64,
    color: Option<u8>,
) {
    let color = color.unwrap_or_else(|| img.median_intensity());
    let (width, height) = (img.width(), img.height());
    for contour in contours {
        let hull = convex_hull(&contour.points);
        let Some(centroid) = polygon_centroid(&hull) else {
            continue;
        };
        let polygon = buffered_vertices(&hull, centroid, buffer_ratio, width, height);
        fill_polygon(img, &polygon, color);
    }
}
