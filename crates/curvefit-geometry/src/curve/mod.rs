//! Curve traits and implementations.

mod bezier;
mod segment;

use curvefit_math::{Point2, Vector2};

pub use bezier::{cubic_bezier, quadratic_bezier, CubicBezier, QuadraticBezier};
pub use segment::Segment;

/// Trait for parametric curves in the plane.
pub trait Curve2: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
