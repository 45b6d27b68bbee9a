//! A fitted spline and its two output views: sampled segments for drawing the
//! curve, and raw control points for visualizing the handles.

use curvefit_core::traits::{BoundingBox, Validate};
use curvefit_core::{CurveError, Result, Tolerance};
use curvefit_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

use crate::curve::{CubicBezier, Segment};
use crate::fit::{fit_with, FitOptions};
use crate::sample::{piece_count, sample_cubic, SampleChain};
use crate::tessellate::append_curve;

/// Cubic Bézier chain produced by [`crate::fit`].
///
/// Anchors sit at every third control point; consecutive pieces share their
/// boundary anchor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FittedSpline {
    control_points: Vec<Point2>,
    closed: bool,
}

impl FittedSpline {
    /// Fit a spline through `points`. Fewer than three points give an empty spline.
    pub fn fit(points: &[Point2], options: &FitOptions) -> Result<Self> {
        Ok(Self {
            control_points: fit_with(points, options)?,
            closed: options.closed,
        })
    }

    /// Wrap an existing cubic control sequence, checking its shape.
    pub fn from_control_points(control_points: Vec<Point2>, closed: bool) -> Result<Self> {
        let spline = Self {
            control_points,
            closed,
        };
        spline.validate()?;
        Ok(spline)
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn into_control_points(self) -> Vec<Point2> {
        self.control_points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    pub fn piece_count(&self) -> usize {
        piece_count(self.control_points.len(), 3)
    }

    /// The interpolated points, in order. A closed spline repeats its first
    /// anchor at the end.
    pub fn anchors(&self) -> impl Iterator<Item = Point2> + '_ {
        self.control_points.iter().step_by(3).copied()
    }

    /// Each cubic piece of the chain.
    pub fn pieces(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.piece_count()).map(move |k| {
            let p = &self.control_points[3 * k..3 * k + 4];
            CubicBezier::new(p[0], p[1], p[2], p[3])
        })
    }

    /// Line segments approximating the curve, `resolution` per piece.
    pub fn segments(&self, resolution: usize) -> Result<SampleChain<'_>> {
        sample_cubic(&self.control_points, resolution)
    }

    /// Straight lines between consecutive control points.
    pub fn control_polygon(&self) -> impl Iterator<Item = Segment> + '_ {
        self.control_points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
    }

    /// Sampled curve as a point list, `resolution` segments per piece.
    pub fn polyline(&self, resolution: usize) -> Result<Vec<Point2>> {
        let segments = self.segments(resolution)?;
        let mut points = Vec::with_capacity(segments.len() + 1);
        for segment in segments {
            if points.is_empty() {
                points.push(segment.start);
            }
            points.push(segment.end);
        }
        Ok(points)
    }

    /// Adaptively flattened curve whose chords deviate from the pieces by at
    /// most roughly `tolerance`.
    pub fn flatten(&self, tolerance: f64) -> Result<Vec<Point2>> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(CurveError::InvalidOperation(format!(
                "flattening tolerance must be positive, got {tolerance}"
            )));
        }
        let mut points = Vec::new();
        for piece in self.pieces() {
            append_curve(&piece, tolerance, &mut points);
        }
        Ok(points)
    }

    /// Check the chain shape, and for closed splines that the last control
    /// point lies within `tol` of the first.
    pub fn validate_with(&self, tol: Tolerance) -> Result<()> {
        let len = self.control_points.len();
        if len == 0 {
            return Ok(());
        }
        if len < 4 || (len - 1) % 3 != 0 {
            return Err(CurveError::InvalidOperation(format!(
                "cubic control sequence must have 3k + 1 points (k >= 1), got {len}"
            )));
        }
        if let Some(index) = self.control_points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFinitePoint { index });
        }
        if self.closed {
            let closing = Segment::new(self.control_points[len - 1], self.control_points[0]);
            if !closing.is_degenerate(tol) {
                return Err(CurveError::InvalidOperation(format!(
                    "closed spline ends {} away from its start",
                    closing.length()
                )));
            }
        }
        Ok(())
    }
}

impl Validate for FittedSpline {
    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

impl BoundingBox for FittedSpline {
    type Bounds = Aabb2;

    /// Bounds of the control points, which contain the whole curve.
    fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.control_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvefit_math::dvec2;

    fn zigzag() -> Vec<Point2> {
        vec![
            dvec2(100.0, 100.0),
            dvec2(200.0, 200.0),
            dvec2(100.0, 300.0),
            dvec2(400.0, 400.0),
            dvec2(500.0, 350.0),
            dvec2(350.0, 200.0),
        ]
    }

    #[test]
    fn test_open_spline_views() {
        let pts = zigzag();
        let spline = FittedSpline::fit(&pts, &FitOptions::open(50.0)).unwrap();
        assert!(!spline.is_closed());
        assert_eq!(spline.control_points().len(), 16);
        assert_eq!(spline.piece_count(), 5);
        assert_eq!(spline.anchors().collect::<Vec<_>>(), pts);
        assert_eq!(spline.pieces().count(), 5);
        assert_eq!(spline.control_polygon().count(), 15);
        assert_eq!(spline.segments(20).unwrap().len(), 100);
        spline.validate().unwrap();
    }

    #[test]
    fn test_closed_spline_views() {
        let pts = zigzag();
        let spline = FittedSpline::fit(&pts, &FitOptions::closed(50.0)).unwrap();
        assert_eq!(spline.control_points().len(), 19);
        assert_eq!(spline.piece_count(), 6);

        let anchors: Vec<_> = spline.anchors().collect();
        assert_eq!(anchors.len(), 7);
        assert_eq!(anchors[6], pts[0]);

        let polyline = spline.polyline(10).unwrap();
        assert_eq!(polyline.len(), 61);
        assert_eq!(polyline[0], pts[0]);
        assert!((polyline[60] - pts[0]).length() < 1e-9);
        spline.validate().unwrap();
    }

    #[test]
    fn test_pieces_join_at_anchors() {
        let spline = FittedSpline::fit(&zigzag(), &FitOptions::closed(80.0)).unwrap();
        let pieces: Vec<_> = spline.pieces().collect();
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn test_empty_spline() {
        let spline = FittedSpline::fit(&zigzag()[..2], &FitOptions::default()).unwrap();
        assert!(spline.is_empty());
        assert_eq!(spline.segments(20).unwrap().count(), 0);
        assert!(spline.polyline(20).unwrap().is_empty());
        assert!(spline.flatten(0.1).unwrap().is_empty());
        assert!(spline.bounding_box().is_none());
        spline.validate().unwrap();
    }

    #[test]
    fn test_flatten_passes_through_anchors() {
        let pts = zigzag();
        let spline = FittedSpline::fit(&pts, &FitOptions::open(60.0)).unwrap();
        let flat = spline.flatten(0.25).unwrap();
        assert_eq!(flat[0], pts[0]);
        assert!((flat[flat.len() - 1] - pts[5]).length() < 1e-9);
        for p in &pts {
            assert!(flat.iter().any(|q| (*q - *p).length() < 1e-9));
        }
        assert!(spline.flatten(0.0).is_err());
    }

    #[test]
    fn test_bounding_box_contains_samples() {
        let spline = FittedSpline::fit(&zigzag(), &FitOptions::closed(120.0)).unwrap();
        let bounds = spline.bounding_box().unwrap().expand(1e-9);
        for seg in spline.segments(16).unwrap() {
            assert!(bounds.contains_point(seg.start));
            assert!(bounds.contains_point(seg.end));
        }
    }

    #[test]
    fn test_closing_gap_tolerance() {
        let nearly_closed = FittedSpline {
            control_points: vec![
                dvec2(0.0, 0.0),
                dvec2(10.0, 10.0),
                dvec2(20.0, 10.0),
                dvec2(0.001, 0.0),
            ],
            closed: true,
        };
        assert!(nearly_closed.validate().is_err());
        assert!(nearly_closed.validate_with(Tolerance::new(1e-6)).is_err());
        nearly_closed.validate_with(Tolerance::new(0.01)).unwrap();
    }

    #[test]
    fn test_from_control_points_checks_shape() {
        let ok = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 1.0), dvec2(3.0, 0.0)];
        assert!(FittedSpline::from_control_points(ok.clone(), false).is_ok());
        assert!(FittedSpline::from_control_points(ok, true).is_err());

        let bad = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 1.0)];
        assert!(matches!(
            FittedSpline::from_control_points(bad, false),
            Err(CurveError::InvalidOperation(_))
        ));

        let nan = vec![dvec2(0.0, 0.0), dvec2(f64::NAN, 1.0), dvec2(2.0, 1.0), dvec2(3.0, 0.0)];
        assert_eq!(
            FittedSpline::from_control_points(nan, false),
            Err(CurveError::NonFinitePoint { index: 1 })
        );
    }
}
