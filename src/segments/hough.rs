//! Progressive probabilistic Hough transform.
//!
//! The classic Matas–Galambos–Kittler scheme: points vote one at a
//! time in shuffled order; the first accumulator cell to reach the vote
//! threshold triggers a gap-tolerant walk along that orientation, and the
//! walked pixels are unvoted and masked out so they cannot seed further
//! segments.

use super::{LineSegment, MAX_LINE_GAP, MIN_LINE_LENGTH, THETA_STEP, VOTE_THRESHOLD};
use crate::image::GrayBuffer;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Fixed seed keeps repeated invocations bit-identical for the same image.
const POINT_ORDER_SEED: u64 = 0x0123_4567_89ab_cdef;

pub(super) fn probabilistic_hough(img: &GrayBuffer) -> Vec<LineSegment> {
    let w = img.width() as i32;
    let h = img.height() as i32;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let num_angle = (std::f64::consts::PI / THETA_STEP).round() as usize;
    let num_rho = ((w + h) * 2 + 1) as usize;
    let rho_offset = (num_rho as i32 - 1) / 2;

    let trig: Vec<(f64, f64)> = (0..num_angle)
        .map(|n| {
            let angle = n as f64 * THETA_STEP;
            (angle.cos(), angle.sin())
        })
        .collect();

    // Foreground mask and the point pool to be consumed.
    let mut mask = vec![false; (w * h) as usize];
    let mut points: Vec<(i32, i32)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if img.get(x as usize, y as usize) != 0 {
                mask[(y * w + x) as usize] = true;
                points.push((x, y));
            }
        }
    }

    let mut accum = vec![0i32; num_angle * num_rho];
    let mut rng = ChaCha8Rng::seed_from_u64(POINT_ORDER_SEED);
    let mut segments = Vec::new();

    let mut remaining = points.len();
    while remaining > 0 {
        let idx = rng.gen_range(0..remaining);
        let (px, py) = points[idx];
        remaining -= 1;
        points[idx] = points[remaining];

        // Swallowed by an earlier segment walk.
        if !mask[(py * w + px) as usize] {
            continue;
        }

        // Vote across all orientations; remember the best cell.
        let mut best_votes = VOTE_THRESHOLD - 1;
        let mut best_angle = 0usize;
        for (n, &(c, s)) in trig.iter().enumerate() {
            let r = (px as f64 * c + py as f64 * s).round() as i32 + rho_offset;
            let cell = &mut accum[n * num_rho + r as usize];
            *cell += 1;
            if *cell > best_votes {
                best_votes = *cell;
                best_angle = n;
            }
        }
        if best_votes < VOTE_THRESHOLD {
            continue;
        }

        // Unit step along the winning orientation, dominant axis stepping
        // by exactly one pixel.
        let (c, s) = trig[best_angle];
        let (ax, ay) = (-s, c);
        let (sx, sy) = if ax.abs() > ay.abs() {
            (ax.signum(), ay / ax.abs())
        } else {
            (ax / ay.abs(), ay.signum())
        };

        // Farthest reachable foreground pixel in each direction.
        let ends = [
            walk_to_end(&mask, w, h, (px, py), (sx, sy)),
            walk_to_end(&mask, w, h, (px, py), (-sx, -sy)),
        ];
        let (x0, y0) = ends[0];
        let (x1, y1) = ends[1];
        let good_line =
            (x1 - x0).abs() >= MIN_LINE_LENGTH || (y1 - y0).abs() >= MIN_LINE_LENGTH;

        // Consume the walked pixels; a good line also retracts their votes
        // so residual cells cannot re-trigger on the same streak.
        for (k, &end) in ends.iter().enumerate() {
            let step = if k == 0 { (sx, sy) } else { (-sx, -sy) };
            let (mut fx, mut fy) = (px as f64, py as f64);
            loop {
                let (x, y) = (fx.round() as i32, fy.round() as i32);
                let at = (y * w + x) as usize;
                if mask[at] {
                    mask[at] = false;
                    if good_line {
                        for (n, &(c, s)) in trig.iter().enumerate() {
                            let r =
                                (x as f64 * c + y as f64 * s).round() as i32 + rho_offset;
                            accum[n * num_rho + r as usize] -= 1;
                        }
                    }
                }
                if (x, y) == end {
                    break;
                }
                fx += step.0;
                fy += step.1;
            }
        }

        if good_line {
            segments.push(LineSegment::new(
                [x0 as f32, y0 as f32],
                [x1 as f32, y1 as f32],
            ));
        }
    }

    segments
}

/// Follow the line from `start` in direction `step`, bridging background
/// runs up to the gap limit; returns the last foreground pixel reached.
fn walk_to_end(
    mask: &[bool],
    w: i32,
    h: i32,
    start: (i32, i32),
    step: (f64, f64),
) -> (i32, i32) {
    let (mut fx, mut fy) = (start.0 as f64, start.1 as f64);
    let mut last = start;
    let mut gap = 0i32;
    loop {
        let (x, y) = (fx.round() as i32, fy.round() as i32);
        if x < 0 || x >= w || y < 0 || y >= h {
            break;
        }
        if mask[(y * w + x) as usize] {
            gap = 0;
            last = (x, y);
        } else {
            gap += 1;
            if gap > MAX_LINE_GAP {
                break;
            }
        }
        fx += step.0;
        fy += step.1;
    }
    last
}
