//! Outer-boundary extraction for connected foreground regions.
//!
//! Components are labeled with an 8-connected flood fill in raster-scan
//! order; each component's outer boundary is then traced clockwise with a
//! Moore neighborhood walk starting from its topmost-leftmost pixel. Only
//! outer boundaries are produced; holes are not tracked.

use crate::image::GrayBuffer;
use serde::Serialize;
use std::collections::VecDeque;

/// Ordered closed boundary of a connected foreground region.
///
/// Points are pixel coordinates in trace order. Single-pixel-wide features
/// revisit pixels on the way back; that is the expected degenerate shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Contour {
    pub points: Vec<[i32; 2]>,
}

impl Contour {
    /// Enclosed area by the shoelace formula over the boundary polygon.
    ///
    /// A single pixel or a one-pixel-wide run encloses zero area.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0f64;
        for i in 0..n {
            let [x0, y0] = self.points[i];
            let [x1, y1] = self.points[(i + 1) % n];
            acc += x0 as f64 * y1 as f64 - x1 as f64 * y0 as f64;
        }
        acc.abs() * 0.5
    }
}

// Clockwise on screen (y grows downward), starting east.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Extract the outer boundary of every 8-connected foreground region.
///
/// Discovery order is the raster order of each region's first pixel, which
/// makes the output deterministic for a given image.
pub fn extract_contours(img: &GrayBuffer) -> Vec<Contour> {
    let (w, h) = (img.width(), img.height());
    let mut labeled = vec![false; w * h];
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if img.get(x, y) == 0 || labeled[y * w + x] {
                continue;
            }
            contours.push(trace_boundary(img, x as i32, y as i32));
            flood_label(img, &mut labeled, x, y);
        }
    }
    contours
}

/// Mark every pixel of the component containing `(x, y)`.
fn flood_label(img: &GrayBuffer, labeled: &mut [bool], x: usize, y: usize) {
    let (w, h) = (img.width(), img.height());
    let mut queue = VecDeque::new();
    labeled[y * w + x] = true;
    queue.push_back((x as i32, y as i32));
    while let Some((cx, cy)) = queue.pop_front() {
        for (dx, dy) in DIRS {
            let (nx, ny) = (cx + dx, cy + dy);
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                continue;
            }
            let idx = ny as usize * w + nx as usize;
            if !labeled[idx] && img.get(nx as usize, ny as usize) != 0 {
                labeled[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
}

#[inline]
fn foreground(img: &GrayBuffer, x: i32, y: i32) -> bool {
    x >= 0
        && y >= 0
        && (x as usize) < img.width()
        && (y as usize) < img.height()
        && img.get(x as usize, y as usize) != 0
}

/// Moore-neighbor boundary trace from the component's first raster pixel.
///
/// The walk scans the 8-neighborhood clockwise, resuming just after the
/// backtracked pixel; it stops once it re-enters the start pixel about to
/// repeat the first move (Jacob's criterion).
fn trace_boundary(img: &GrayBuffer, sx: i32, sy: i32) -> Contour {
    let start = (sx, sy);
    let mut points = vec![[sx, sy]];

    // `(sx, sy)` is topmost-leftmost, so W/NW/N/NE are background; treating
    // W as the initial backtrack starts the scan at NW without skipping a
    // boundary neighbor.
    let Some((second, dir0)) = next_boundary(img, start, 0) else {
        return Contour { points }; // isolated pixel
    };

    let mut cur = second;
    let mut dir = dir0;
    // Hard cap against pathological traces.
    let limit = 4 * img.width() * img.height() + 8;

    while points.len() < limit {
        points.push([cur.0, cur.1]);
        let Some((next, ndir)) = next_boundary(img, cur, dir) else {
            break;
        };
        if next == start {
            if let Some((peek, pdir)) = next_boundary(img, next, ndir) {
                if peek == second && pdir == dir0 {
                    break;
                }
            }
        }
        cur = next;
        dir = ndir;
    }

    Contour { points }
}

/// First foreground neighbor clockwise, starting just after the pixel the
/// walk arrived from (which sits at `dir + 4`).
fn next_boundary(
    img: &GrayBuffer,
    (cx, cy): (i32, i32),
    dir: usize,
) -> Option<((i32, i32), usize)> {
    let from = (dir + 5) % 8;
    for k in 0..8 {
        let d = (from + k) % 8;
        let (dx, dy) = DIRS[d];
        let (nx, ny) = (cx + dx, cy + dy);
        if foreground(img, nx, ny) {
            return Some(((nx, ny), d));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_image(size: usize, x0: usize, y0: usize, side: usize) -> GrayBuffer {
        let mut img = GrayBuffer::zeros(size, size);
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                img.set(x, y, 255);
            }
        }
        img
    }

    #[test]
    fn blank_image_has_no_contours() {
        let img = GrayBuffer::zeros(32, 32);
        assert!(extract_contours(&img).is_empty());
    }

    #[test]
    fn filled_square_yields_one_contour_with_expected_area() {
        let img = square_image(40, 10, 10, 11);
        let contours = extract_contours(&img);
        assert_eq!(contours.len(), 1);
        // Boundary runs through pixel centers, so an n-wide square encloses
        // (n-1)^2.
        assert_eq!(contours[0].area(), 100.0);
    }

    #[test]
    fn isolated_pixel_is_a_zero_area_contour() {
        let mut img = GrayBuffer::zeros(8, 8);
        img.set(4, 4, 255);
        let contours = extract_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, vec![[4, 4]]);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn one_pixel_wide_line_encloses_zero_area() {
        let mut img = GrayBuffer::zeros(16, 16);
        for x in 2..14 {
            img.set(x, 8, 255);
        }
        let contours = extract_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn separate_regions_yield_separate_contours() {
        let mut img = square_image(40, 2, 2, 5);
        for y in 20..25 {
            for x in 20..25 {
                img.set(x, y, 255);
            }
        }
        let contours = extract_contours(&img);
        assert_eq!(contours.len(), 2);
        // Raster discovery order: top-left region first.
        assert_eq!(contours[0].points[0], [2, 2]);
        assert_eq!(contours[1].points[0], [20, 20]);
    }
}
