//! curvefit geometry: Bézier evaluation, chain sampling, and the
//! interpolating curve fitter.

pub mod curve;
pub mod fit;
pub mod sample;
pub mod spline;
pub mod tessellate;

pub use curve::{cubic_bezier, quadratic_bezier, Curve2, CubicBezier, QuadraticBezier, Segment};
pub use fit::{fit, fit_with, FitOptions, DEFAULT_CURVATURE, MIN_FIT_POINTS};
pub use sample::{
    polyline_length, sample_chain, sample_cubic, sample_quadratic, SampleChain,
    DEFAULT_RESOLUTION,
};
pub use spline::FittedSpline;
pub use tessellate::curve_to_polyline;
