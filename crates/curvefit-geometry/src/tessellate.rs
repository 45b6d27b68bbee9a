//! Adaptive flattening of curves into polylines.

use curvefit_math::Point2;

use crate::curve::Curve2;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds the given `tolerance`.
///
/// # Arguments
/// * `curve` - The curve to flatten
/// * `tolerance` - Maximum allowed deviation from the true curve
///
/// # Returns
/// A vector of points approximating the curve, including both ends.
pub fn curve_to_polyline(curve: &dyn Curve2, tolerance: f64) -> Vec<Point2> {
    let mut points = Vec::new();
    append_curve(curve, tolerance, &mut points);
    points
}

/// Append the flattened `curve` to `points`, skipping its start point when it
/// already ends the polyline.
pub(crate) fn append_curve(curve: &dyn Curve2, tolerance: f64, points: &mut Vec<Point2>) {
    let (t_min, t_max) = curve.domain();
    let start = curve.point_at(t_min);
    if points.last() != Some(&start) {
        points.push(start);
    }
    subdivide_curve(curve, t_min, t_max, tolerance, points, 0);
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Always split at least this deep so S-shaped pieces whose midpoint happens
/// to lie on the chord are not mistaken for straight lines.
const MIN_DEPTH: u32 = 1;

fn subdivide_curve(
    curve: &dyn Curve2,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if depth < MIN_DEPTH || deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CubicBezier, Segment};
    use curvefit_math::{dvec2, DVec2};

    #[test]
    fn test_segment_to_polyline() {
        let seg = Segment::new(DVec2::ZERO, dvec2(10.0, 0.0));
        let points = curve_to_polyline(&seg, 0.01);
        // Only the forced first split
        assert_eq!(points.len(), 3);
        assert!((points[0] - DVec2::ZERO).length() < 1e-10);
        assert!((points[2] - dvec2(10.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_cubic_to_polyline_within_tolerance() {
        let curve = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(0.0, 100.0),
            dvec2(100.0, 100.0),
            dvec2(100.0, 0.0),
        );
        let tolerance = 0.05;
        let points = curve_to_polyline(&curve, tolerance);
        assert!(points.len() > 10, "expected refinement, got {}", points.len());
        assert!((points[0] - curve.start()).length() < 1e-10);
        assert!((points[points.len() - 1] - curve.end()).length() < 1e-10);

        // Midpoint of every chord stays close to the curve's symmetric arch
        for w in points.windows(2) {
            let mid = (w[0] + w[1]) * 0.5;
            assert!(mid.y <= 75.0 + tolerance);
        }
    }

    #[test]
    fn test_append_skips_shared_start() {
        let a = Segment::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        let b = Segment::new(dvec2(1.0, 0.0), dvec2(1.0, 1.0));
        let mut points = Vec::new();
        append_curve(&a, 0.1, &mut points);
        append_curve(&b, 0.1, &mut points);
        assert_eq!(points.len(), 5);
        assert_eq!(points.iter().filter(|p| **p == dvec2(1.0, 0.0)).count(), 1);
    }
}
