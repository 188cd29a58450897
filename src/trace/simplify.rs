//! Angle/spacing polyline reduction.
//!
//! Pixel-traced paths carry a vertex per pixel. This pass keeps corners and
//! drops near-collinear or tightly spaced samples in a single forward scan,
//! always comparing against the most recently kept vertex:
//!
//! - a candidate closer than `min_spacing` to the last kept vertex is dropped
//! - otherwise the angle at the candidate between the last kept vertex and
//!   the next original vertex is measured; the candidate is dropped only when
//!   that angle is obtuse (> 90 degrees) and within `angle_threshold` of a
//!   straight line
//! - the original last vertex is appended if it is at least `min_spacing`
//!   away from the last kept vertex
//!
//! Inputs with fewer than three points are returned unchanged.

use super::point::Point;

/// Stabilizes normalization of zero-length vectors.
const NORM_EPSILON: f64 = 1e-6;

/// Angle in degrees at `curr` between rays `curr -> prev` and `curr -> next`.
///
/// The result lies in `[0, 180]`; 180 means the three points are collinear
/// with `curr` between the others.
pub fn turning_angle(prev: &Point, curr: &Point, next: &Point) -> f64 {
    let (v1x, v1y) = (prev.x - curr.x, prev.y - curr.y);
    let (v2x, v2y) = (next.x - curr.x, next.y - curr.y);

    let n1 = (v1x * v1x + v1y * v1y).sqrt() + NORM_EPSILON;
    let n2 = (v2x * v2x + v2y * v2y).sqrt() + NORM_EPSILON;

    let dot = ((v1x / n1) * (v2x / n2) + (v1y / n1) * (v2y / n2)).clamp(-1.0, 1.0);
    dot.acos().to_degrees()
}

/// Simplify a traced path.
///
/// # Arguments
/// * `points` - Path vertices in traversal order
/// * `angle_threshold` - Max deviation from straight (degrees) for dropping a vertex
/// * `min_spacing` - Minimum distance between consecutive kept vertices
///
/// # Returns
/// Reduced path starting with `points[0]`.
pub fn simplify_path(points: &[Point], angle_threshold: f64, min_spacing: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut simplified = vec![points[0]];

    for i in 1..points.len() - 1 {
        let prev = simplified[simplified.len() - 1];
        let curr = points[i];
        let next = points[i + 1];

        if curr.distance_to(&prev) < min_spacing {
            continue;
        }

        let angle = turning_angle(&prev, &curr, &next);
        if angle <= 90.0 || (angle - 180.0).abs() > angle_threshold {
            simplified.push(curr);
        }
    }

    let last = points[points.len() - 1];
    if last.distance_to(&simplified[simplified.len() - 1]) >= min_spacing {
        simplified.push(last);
    }

    simplified
}
