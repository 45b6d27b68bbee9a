//! Free-standing 2D vector primitives used by the curve fitter.

use curvefit_core::{CurveError, Result};

use crate::{Point2, Vector2};

/// Dot product of two 2D vectors.
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Euclidean length of `a`, without intermediate overflow for large coordinates.
pub fn norm(a: Vector2) -> f64 {
    a.x.hypot(a.y)
}

/// Euclidean distance between two points.
pub fn distance(a: Point2, b: Point2) -> f64 {
    norm(b - a)
}

/// Unit vector pointing in the direction of `a`.
///
/// Returns [`CurveError::DegenerateVector`] for a zero-length input, or when
/// the length is so small that the scaled result would not be finite.
pub fn normalize(a: Vector2) -> Result<Vector2> {
    let len = norm(a);
    if len == 0.0 {
        return Err(CurveError::DegenerateVector);
    }
    let unit = a * (1.0 / len);
    if unit.is_finite() {
        Ok(unit)
    } else {
        Err(CurveError::DegenerateVector)
    }
}

/// Orthogonal projection of `p` onto the line through `p0` and `p1`.
///
/// `p1 - p0` must be a unit vector.
///
/// # Panics
/// Debug builds panic when `p1 - p0` is not of unit length. Release builds do
/// not check, and the result is then scaled by the squared length of the
/// direction. Use [`crate::Line2`] for a checked, normalized line.
pub fn project_point_on_line(p: Point2, p0: Point2, p1: Point2) -> Point2 {
    let d = p1 - p0;
    p0 + project_point_on_line_fac(p, p0, p1) * d
}

/// Signed factor along the unit direction `p1 - p0` of the projection of `p`.
///
/// Same precondition as [`project_point_on_line`], including the debug-build
/// panic on a non-unit direction.
pub fn project_point_on_line_fac(p: Point2, p0: Point2, p1: Point2) -> f64 {
    let d = p1 - p0;
    debug_assert!(
        (dot(d, d) - 1.0).abs() < 1e-6,
        "line direction must be normalized, got length {}",
        norm(d)
    );
    dot(d, p - p0)
}
