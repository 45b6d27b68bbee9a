//! Quadratic and cubic Bézier evaluation.
//!
//! Both evaluators use repeated linear interpolation, which is numerically
//! equivalent to de Casteljau's algorithm. The parameter is not clamped:
//! values outside `[0, 1]` extrapolate the polynomial.

use curvefit_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve2;

/// Point on the quadratic Bézier curve `p0, p1, p2` at parameter `t`.
pub fn quadratic_bezier(t: f64, p0: Point2, p1: Point2, p2: Point2) -> Point2 {
    let s = 1.0 - t;
    s * (s * p0 + t * p1) + t * (s * p1 + t * p2)
}

/// Point on the cubic Bézier curve `p0, p1, p2, p3` at parameter `t`.
pub fn cubic_bezier(t: f64, p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Point2 {
    (1.0 - t) * quadratic_bezier(t, p0, p1, p2) + t * quadratic_bezier(t, p1, p2, p3)
}

/// A single quadratic Bézier piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub points: [Point2; 3],
}

impl QuadraticBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }
}

impl Curve2 for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let [p0, p1, p2] = self.points;
        quadratic_bezier(t, p0, p1, p2)
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let [p0, p1, p2] = self.points;
        2.0 * ((1.0 - t) * (p1 - p0) + t * (p2 - p1))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// A single cubic Bézier piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub points: [Point2; 4],
}

impl CubicBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    pub fn end(&self) -> Point2 {
        self.points[3]
    }
}

impl Curve2 for CubicBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.points;
        cubic_bezier(t, p0, p1, p2, p3)
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.points;
        3.0 * quadratic_bezier(t, p1 - p0, p2 - p1, p3 - p2)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
