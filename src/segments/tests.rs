use super::detect_line_segments;
use crate::image::GrayBuffer;

/// Draw a one-pixel line with Bresenham's algorithm.
fn draw_line(img: &mut GrayBuffer, from: (i32, i32), to: (i32, i32), value: u8) {
    let (mut x, mut y) = from;
    let dx = (to.0 - from.0).abs();
    let dy = -(to.1 - from.1).abs();
    let sx = if from.0 < to.0 { 1 } else { -1 };
    let sy = if from.1 < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        img.set(x as usize, y as usize, value);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[test]
fn blank_image_yields_no_segments() {
    let img = GrayBuffer::zeros(64, 64);
    assert_eq!(detect_line_segments(&img), None);
}

#[test]
fn long_horizontal_line_is_recovered_with_its_length() {
    let mut img = GrayBuffer::zeros(400, 400);
    draw_line(&mut img, (50, 200), (350, 200), 255);
    let segments = detect_line_segments(&img).expect("a 300 px line must be found");
    assert_eq!(segments.len(), 1);
    let len = segments[0].length();
    assert!(
        (len - 300.0).abs() <= 2.0,
        "expected length near 300, got {len}"
    );
}

#[test]
fn diagonal_line_is_recovered_with_euclidean_length() {
    let mut img = GrayBuffer::zeros(400, 400);
    draw_line(&mut img, (50, 50), (350, 350), 255);
    let segments = detect_line_segments(&img).expect("a long diagonal must be found");
    let longest = segments
        .iter()
        .map(|s| s.length())
        .fold(0.0f32, f32::max);
    let expected = (2.0f32).sqrt() * 300.0;
    assert!(
        (longest - expected).abs() <= 3.0,
        "expected length near {expected}, got {longest}"
    );
}

#[test]
fn line_below_the_vote_threshold_is_ignored() {
    let mut img = GrayBuffer::zeros(400, 400);
    // 100 collinear points cannot reach the 200-vote threshold.
    draw_line(&mut img, (50, 200), (149, 200), 255);
    assert_eq!(detect_line_segments(&img), None);
}

#[test]
fn small_gaps_are_bridged_into_one_segment() {
    let mut img = GrayBuffer::zeros(450, 450);
    // Three collinear runs separated by 2 px gaps.
    draw_line(&mut img, (50, 100), (150, 100), 255);
    draw_line(&mut img, (153, 100), (253, 100), 255);
    draw_line(&mut img, (256, 100), (356, 100), 255);
    let segments = detect_line_segments(&img).expect("bridged line must be found");
    assert_eq!(segments.len(), 1, "gaps within tolerance must merge");
    assert!(
        segments[0].length() >= 300.0,
        "merged segment should span the full run, got {}",
        segments[0].length()
    );
}

#[test]
fn detection_is_deterministic() {
    let mut img = GrayBuffer::zeros(400, 400);
    draw_line(&mut img, (20, 380), (380, 20), 255);
    let first = detect_line_segments(&img);
    let second = detect_line_segments(&img);
    assert_eq!(first, second);
}
