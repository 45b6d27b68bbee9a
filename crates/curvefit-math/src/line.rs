use crate::vector::{dot, normalize};
use crate::{Point2, Vector2};
use curvefit_core::Result;
use serde::{Deserialize, Serialize};

/// An infinite line in 2D space defined by an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Line2 {
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        Ok(Self {
            origin,
            direction: normalize(direction)?,
        })
    }

    /// Line through two distinct points, directed from `p0` to `p1`.
    pub fn through(p0: Point2, p1: Point2) -> Result<Self> {
        Self::new(p0, p1 - p0)
    }

    /// Get a point along the line at signed distance `t` from the origin.
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Signed distance along the direction of the projection of `point`.
    pub fn project_factor(&self, point: Point2) -> f64 {
        dot(self.direction, point - self.origin)
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn project_point(&self, point: Point2) -> Point2 {
        self.at(self.project_factor(point))
    }

    /// Distance from a point to the line.
    pub fn distance_to_point(&self, point: Point2) -> f64 {
        (point - self.project_point(point)).length()
    }
}
