use streak_detector::image::GrayBuffer;

/// Uniform featureless background.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> GrayBuffer {
    GrayBuffer::new(width, height, vec![value; width * height])
}

/// Draw a one-pixel line with Bresenham's algorithm.
pub fn draw_line(img: &mut GrayBuffer, from: (i32, i32), to: (i32, i32), value: u8) {
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

/// Fill an axis-aligned rectangle, corners inclusive.
pub fn fill_rect(img: &mut GrayBuffer, x0: usize, y0: usize, x1: usize, y1: usize, value: u8) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.set(x, y, value);
        }
    }
}
