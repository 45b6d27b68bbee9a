//! Interpolating cubic Bézier fit through an ordered point sequence.
//!
//! Every input point becomes an anchor of the resulting chain. The two handles
//! around an interior anchor lie on the line through the anchor parallel to
//! the chord between its neighbours, which makes the curve tangent-continuous.
//! Each handle is pulled out by the curvature factor, clamped to half the
//! distance to the neighbour on that side.

use curvefit_core::traits::Validate;
use curvefit_core::{CurveError, Result};
use curvefit_math::{distance, normalize, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Fewest points that produce a non-empty fit.
pub const MIN_FIT_POINTS: usize = 3;

/// Default handle length, in input units.
pub const DEFAULT_CURVATURE: f64 = 50.0;

/// Parameters for [`fit_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Connect the last point back to the first.
    pub closed: bool,
    /// Maximum handle length. 0 gives sharp corners, large values round them
    /// as far as the neighbour clamp allows.
    pub curvature: f64,
}

impl FitOptions {
    pub fn open(curvature: f64) -> Self {
        Self {
            closed: false,
            curvature,
        }
    }

    pub fn closed(curvature: f64) -> Self {
        Self {
            closed: true,
            curvature,
        }
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self::closed(DEFAULT_CURVATURE)
    }
}

impl Validate for FitOptions {
    fn validate(&self) -> Result<()> {
        check_curvature(self.curvature)
    }
}

/// Fit a cubic Bézier chain through `points`, see [`fit`].
pub fn fit_with(points: &[Point2], options: &FitOptions) -> Result<Vec<Point2>> {
    fit(points, options.closed, options.curvature)
}

/// Compute the cubic Bézier control points of a smooth curve through `points`.
///
/// The result is a chain where `control[3 * k] == points[k]`:
/// * open: `3N - 2` points, from `points[0]` to `points[N - 1]`;
/// * closed: `3N + 1` points, the last one repeating `points[0]`.
///
/// Fewer than [`MIN_FIT_POINTS`] points give an empty chain. Fails with
/// [`CurveError::DegenerateVector`] when the two neighbours of a vertex (or the
/// two points of an open end) coincide, and rejects negative or non-finite
/// curvature and non-finite points before doing any work.
pub fn fit(points: &[Point2], closed: bool, curvature: f64) -> Result<Vec<Point2>> {
    check_curvature(curvature)?;

    if points.len() < MIN_FIT_POINTS {
        log::debug!(
            "fit skipped: {} point(s), need at least {}",
            points.len(),
            MIN_FIT_POINTS
        );
        return Ok(Vec::new());
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(CurveError::NonFinitePoint { index });
    }

    let control = if closed {
        fit_closed(points, curvature)?
    } else {
        fit_open(points, curvature)?
    };

    log::debug!(
        "fitted {} {} points (curvature {}) -> {} control points",
        if closed { "closed" } else { "open" },
        points.len(),
        curvature,
        control.len()
    );
    Ok(control)
}

fn check_curvature(curvature: f64) -> Result<()> {
    if curvature.is_finite() && curvature >= 0.0 {
        Ok(())
    } else {
        Err(CurveError::InvalidCurvature(curvature))
    }
}

/// Handle length at `anchor` towards `neighbour`.
fn handle_length(anchor: Point2, neighbour: Point2, curvature: f64) -> f64 {
    curvature.min(0.5 * distance(anchor, neighbour))
}

/// Unit direction from `points[from]` to `points[to]`, used as the tangent at `vertex`.
fn tangent(points: &[Point2], from: usize, to: usize, vertex: usize) -> Result<Vector2> {
    normalize(points[to] - points[from]).map_err(|err| {
        log::warn!(
            "degenerate tangent at vertex {}: points #{} and #{} coincide at {:?}",
            vertex,
            from,
            to,
            points[from]
        );
        err
    })
}

fn fit_closed(points: &[Point2], curvature: f64) -> Result<Vec<Point2>> {
    let n = points.len();
    let len = 3 * n;
    let mut control = vec![Point2::ZERO; len + 1];

    for (i, &anchor) in points.iter().enumerate() {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        let dir = tangent(points, prev, next, i)?;

        // The incoming handle of vertex 0 wraps to the end of the chain.
        control[(3 * i + len - 1) % len] =
            anchor - handle_length(anchor, points[prev], curvature) * dir;
        control[3 * i] = anchor;
        control[3 * i + 1] = anchor + handle_length(anchor, points[next], curvature) * dir;
    }

    control[len] = control[0];
    Ok(control)
}

fn fit_open(points: &[Point2], curvature: f64) -> Result<Vec<Point2>> {
    let n = points.len();
    let len = 3 * n - 2;
    let mut control = vec![Point2::ZERO; len];

    let first = points[0];
    control[0] = first;
    control[1] = first + handle_length(first, points[1], curvature) * tangent(points, 0, 1, 0)?;

    for i in 1..n - 1 {
        let anchor = points[i];
        let dir = tangent(points, i - 1, i + 1, i)?;

        control[3 * i - 1] = anchor - handle_length(anchor, points[i - 1], curvature) * dir;
        control[3 * i] = anchor;
        control[3 * i + 1] = anchor + handle_length(anchor, points[i + 1], curvature) * dir;
    }

    let last = points[n - 1];
    control[len - 2] = last
        - handle_length(last, points[n - 2], curvature) * tangent(points, n - 2, n - 1, n - 1)?;
    control[len - 1] = last;

    Ok(control)
}
