//! Scanline polygon fill.

use crate::image::GrayBuffer;

/// Fill a polygon with `color` using even-odd scanline rasterization.
///
/// Coverage is decided at pixel centers, sampling each row at `y + 0.5`.
/// Polygons with fewer than three vertices cover no pixel centers and are
/// ignored.
pub fn fill_polygon(img: &mut GrayBuffer, vertices: &[[i32; 2]], color: u8) {
    let n = vertices.len();
    if n < 3 {
        return;
    }
    let min_y = vertices.iter().map(|p| p[1]).min().unwrap_or(0).max(0);
    let max_y = vertices
        .iter()
        .map(|p| p[1])
        .max()
        .unwrap_or(0)
        .min(img.height() as i32 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(8);
    for y in min_y..=max_y {
        let sample = y as f64 + 0.5;
        crossings.clear();
        for i in 0..n {
            let [x0, y0] = vertices[i];
            let [x1, y1] = vertices[(i + 1) % n];
            let (y0, y1) = (y0 as f64, y1 as f64);
            if (y0 <= sample && y1 > sample) || (y1 <= sample && y0 > sample) {
                let t = (sample - y0) / (y1 - y0);
                crossings.push(x0 as f64 + t * (x1 - x0) as f64);
            }
        }
        crossings.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in crossings.chunks_exact(2) {
            let x_start = ((pair[0] - 0.5).ceil() as i32).max(0);
            let x_end = ((pair[1] - 0.5).floor() as i32).min(img.width() as i32 - 1);
            for x in x_start..=x_end {
                img.set(x as usize, y as usize, color);
            }
        }
    }
}
