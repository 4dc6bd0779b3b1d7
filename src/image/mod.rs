//! Owned grayscale buffers and disk I/O.

pub mod io;

pub use io::{load_grayscale_image, save_grayscale_u8, write_json_file};

/// Owned 8-bit grayscale buffer, tightly packed row-major.
///
/// Every pipeline stage owns its buffer; the noise-suppression fill writes
/// pixels in place, so the buffer is mutable by design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Construct a buffer from raw bytes; `data.len()` must be `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// All-zero buffer of the given dimensions.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0u8; width * height])
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Entire buffer as a flat slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Median intensity over all pixels, via a 256-bin histogram.
    ///
    /// Fallback fill color for the standalone region-erase operation; the
    /// detection pipeline always fills with background 0.
    pub fn median_intensity(&self) -> u8 {
        let mut hist = [0usize; 256];
        for &v in &self.data {
            hist[v as usize] += 1;
        }
        let half = self.data.len() / 2;
        let mut seen = 0usize;
        for (value, &count) in hist.iter().enumerate() {
            seen += count;
            if seen > half {
                return value as u8;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::GrayBuffer;

    #[test]
    fn median_of_uniform_buffer_is_the_value() {
        let img = GrayBuffer::new(4, 4, vec![42u8; 16]);
        assert_eq!(img.median_intensity(), 42);
    }

    #[test]
    fn median_of_mostly_dark_buffer_is_dark() {
        let mut data = vec![0u8; 100];
        for v in data.iter_mut().take(10) {
            *v = 255;
        }
        let img = GrayBuffer::new(10, 10, data);
        assert_eq!(img.median_intensity(), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut img = GrayBuffer::zeros(8, 8);
        img.set(3, 5, 200);
        assert_eq!(img.get(3, 5), 200);
        assert_eq!(img.get(5, 3), 0);
    }
}
