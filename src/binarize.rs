//! Fixed-threshold binarization.

use crate::image::GrayBuffer;

/// Threshold a grayscale buffer into a two-level image.
///
/// A sample becomes `max_value` where the source intensity is strictly above
/// `threshold`, else 0. Shape is preserved.
pub fn binarize(src: &GrayBuffer, threshold: u8, max_value: u8) -> GrayBuffer {
    let mut data = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        for &v in src.row(y) {
            data.push(if v > threshold { max_value } else { 0 });
        }
    }
    GrayBuffer::new(src.width(), src.height(), data)
}
