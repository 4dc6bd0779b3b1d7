//! Convex hull, polygon centroid and the buffered fill polygon.

/// Clamp `v` into `[min_v, max_v]`.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, min_v: T, max_v: T) -> T {
    if v < min_v {
        min_v
    } else if v > max_v {
        max_v
    } else {
        v
    }
}

#[inline]
fn cross(o: [i32; 2], a: [i32; 2], b: [i32; 2]) -> i64 {
    (a[0] - o[0]) as i64 * (b[1] - o[1]) as i64 - (a[1] - o[1]) as i64 * (b[0] - o[0]) as i64
}

/// Convex hull of a point set by Andrew's monotone chain.
///
/// Returns the hull vertices in counter-clockwise order (y-up convention);
/// collinear interior points are dropped. Degenerate inputs (one point, all
/// points collinear) return the surviving chain unchanged.
pub fn convex_hull(points: &[[i32; 2]]) -> Vec<[i32; 2]> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    let n = pts.len();
    if n < 3 {
        return pts;
    }

    let mut hull: Vec<[i32; 2]> = Vec::with_capacity(2 * n);
    for &p in pts.iter() {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev() {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop(); // last point repeats the first
    hull
}

/// Area-weighted centroid of a polygon (standard first-moment formula).
///
/// Returns `None` for a degenerate polygon with zero enclosed area; callers
/// must skip such hulls rather than divide by zero.
pub fn polygon_centroid(vertices: &[[i32; 2]]) -> Option<(f64, f64)> {
    if vertices.len() < 3 {
        return None;
    }
    let mut area2 = 0.0f64; // twice the signed area
    let mut cx = 0.0f64;
    let mut cy = 0.0f64;
    let n = vertices.len();
    for i in 0..n {
        let [x0, y0] = vertices[i];
        let [x1, y1] = vertices[(i + 1) % n];
        let w = x0 as f64 * y1 as f64 - x1 as f64 * y0 as f64;
        area2 += w;
        cx += (x0 + x1) as f64 * w;
        cy += (y0 + y1) as f64 * w;
    }
    if area2 == 0.0 {
        return None;
    }
    let scale = 1.0 / (3.0 * area2);
    Some((cx * scale, cy * scale))
}

/// Scale hull vertices radially about the centroid by `buffer_ratio`, clamp
/// into `[0, width] x [0, height]` and truncate to pixel coordinates.
pub fn buffered_vertices(
    hull: &[[i32; 2]],
    (cx, cy): (f64, f64),
    buffer_ratio: f64,
    width: usize,
    height: usize,
) -> Vec<[i32; 2]> {
    hull.iter()
        .map(|&[x, y]| {
            let vx = x as f64 - cx;
            let vy = y as f64 - cy;
            let bx = clamp(vx * buffer_ratio + cx, 0.0, width as f64);
            let by = clamp(vy * buffer_ratio + cy, 0.0, height as f64);
            [bx as i32, by as i32]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_is_identity_inside_the_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn clamp_saturates_at_the_bounds() {
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn hull_of_square_with_interior_points_is_the_square() {
        let pts = vec![[0, 0], [10, 0], [10, 10], [0, 10], [5, 5], [3, 7]];
        let mut hull = convex_hull(&pts);
        hull.sort_unstable();
        assert_eq!(hull, vec![[0, 0], [0, 10], [10, 0], [10, 10]]);
    }

    #[test]
    fn hull_of_collinear_points_is_the_two_extremes() {
        let pts = vec![[0, 0], [2, 2], [4, 4], [6, 6]];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![[0, 0], [6, 6]]);
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let hull = vec![[0, 0], [10, 0], [10, 10], [0, 10]];
        let (cx, cy) = polygon_centroid(&hull).expect("square has area");
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 5.0);
    }

    #[test]
    fn centroid_of_degenerate_hull_is_none() {
        assert_eq!(polygon_centroid(&[[4, 4]]), None);
        assert_eq!(polygon_centroid(&[[0, 0], [6, 6]]), None);
        // Collinear triangle: three points, zero area.
        assert_eq!(polygon_centroid(&[[0, 0], [3, 3], [6, 6]]), None);
    }

    #[test]
    fn buffered_vertices_expand_about_the_centroid() {
        let hull = vec![[10, 10], [20, 10], [20, 20], [10, 20]];
        let out = buffered_vertices(&hull, (15.0, 15.0), 2.0, 100, 100);
        assert_eq!(out, vec![[5, 5], [25, 5], [25, 25], [5, 25]]);
    }

    #[test]
    fn buffered_vertices_clamp_to_image_bounds() {
        let hull = vec![[0, 0], [30, 0], [30, 30], [0, 30]];
        let out = buffered_vertices(&hull, (15.0, 15.0), 10.0, 40, 35);
        for [x, y] in out {
            assert!((0..=40).contains(&x));
            assert!((0..=35).contains(&y));
        }
    }

    #[test]
    fn buffered_vertices_can_shrink() {
        let hull = vec![[10, 10], [20, 10], [20, 20], [10, 20]];
        let out = buffered_vertices(&hull, (15.0, 15.0), 0.5, 100, 100);
        assert_eq!(out, vec![[12, 12], [17, 12], [17, 17], [12, 17]]);
    }
}
