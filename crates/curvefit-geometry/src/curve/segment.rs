//! Straight line segment, the unit of sampled output.

use curvefit_core::Tolerance;
use curvefit_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve2;

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.is_zero(self.length())
    }
}

impl Curve2 for Segment {
    fn point_at(&self, t: f64) -> Point2 {
        self.start + t * (self.end - self.start)
    }

    fn tangent_at(&self, _t: f64) -> Vector2 {
        self.end - self.start
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
