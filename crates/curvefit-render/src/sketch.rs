use curvefit_core::traits::Validate;
use curvefit_core::{CurveError, Result};
use curvefit_geometry::{FitOptions, FittedSpline, DEFAULT_RESOLUTION};
use curvefit_math::{Aabb2, Point2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::draw::{DrawList, Stroke};

/// Display settings for [`Sketch::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub fit: FitOptions,
    /// Segments per cubic piece
    pub resolution: usize,
    pub show_control_points: bool,
    pub show_interpolation_points: bool,
    pub marker_radius: f64,
}

impl SketchConfig {
    pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            fit: FitOptions::default(),
            resolution: DEFAULT_RESOLUTION,
            show_control_points: true,
            show_interpolation_points: true,
            marker_radius: Self::DEFAULT_MARKER_RADIUS,
        }
    }
}

impl Validate for SketchConfig {
    fn validate(&self) -> Result<()> {
        self.fit.validate()?;
        if self.resolution == 0 {
            return Err(CurveError::InvalidResolution(self.resolution));
        }
        if !(self.marker_radius.is_finite() && self.marker_radius >= 0.0) {
            return Err(CurveError::InvalidOperation(format!(
                "marker radius must be finite and non-negative, got {}",
                self.marker_radius
            )));
        }
        Ok(())
    }
}

/// A set of independent curves, each an ordered list of interpolation points.
///
/// New points always go to the last curve. There is always at least one
/// curve, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SketchCurves")]
pub struct Sketch {
    curves: Vec<Vec<Point2>>,
}

/// Serialized form of a [`Sketch`], normalized through [`Sketch::from_curves`].
#[derive(Deserialize)]
struct SketchCurves {
    curves: Vec<Vec<Point2>>,
}

impl From<SketchCurves> for Sketch {
    fn from(repr: SketchCurves) -> Self {
        Self::from_curves(repr.curves)
    }
}

impl Sketch {
    /// Create a sketch holding one empty curve
    pub fn new() -> Self {
        Self {
            curves: vec![Vec::new()],
        }
    }

    /// Create a sketch from existing curves. An empty list yields one empty curve.
    pub fn from_curves(curves: Vec<Vec<Point2>>) -> Self {
        if curves.is_empty() {
            Self::new()
        } else {
            Self { curves }
        }
    }

    pub fn curves(&self) -> &[Vec<Point2>] {
        &self.curves
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Total number of interpolation points across all curves
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(Vec::len).sum()
    }

    /// Append a point to the last curve
    pub fn push_point(&mut self, point: Point2) {
        self.current_mut().push(point);
    }

    /// Remove the last point of the last curve
    pub fn pop_point(&mut self) -> Option<Point2> {
        self.current_mut().pop()
    }

    /// Start a new, empty curve that receives subsequent points
    pub fn start_new_curve(&mut self) {
        self.curves.push(Vec::new());
    }

    /// Drop every curve, leaving one empty curve
    pub fn clear(&mut self) {
        self.curves = vec![Vec::new()];
    }

    /// The curve receiving new points
    fn current_mut(&mut self) -> &mut Vec<Point2> {
        if self.curves.is_empty() {
            self.curves.push(Vec::new());
        }
        let last = self.curves.len() - 1;
        &mut self.curves[last]
    }

    /// Bounding box of all interpolation points
    pub fn bounds(&self) -> Option<Aabb2> {
        self.curves
            .iter()
            .filter_map(|c| Aabb2::from_points(c))
            .reduce(|a, b| a.merge(&b))
    }

    /// Fit every curve and collect the drawing commands.
    ///
    /// Per curve, in order: interpolation-point markers, the sampled curve,
    /// then the control polygon. A curve whose fit fails still gets its
    /// markers but no lines, and its index is listed in [`DrawList::skipped`].
    pub fn draw(&self, config: &SketchConfig) -> Result<DrawList> {
        config.validate()?;

        let fits: Vec<Result<FittedSpline>> = self
            .curves
            .par_iter()
            .map(|points| FittedSpline::fit(points, &config.fit))
            .collect();

        let mut list = DrawList::new();
        for (index, (points, fitted)) in self.curves.iter().zip(fits).enumerate() {
            if config.show_interpolation_points {
                for &p in points {
                    list.push_marker(p, config.marker_radius);
                }
            }

            let spline = match fitted {
                Ok(spline) => spline,
                Err(err) => {
                    log::warn!("skipping curve {} ({} points): {}", index, points.len(), err);
                    list.skipped.push(index);
                    continue;
                }
            };

            for segment in spline.segments(config.resolution)? {
                list.push_line(segment, Stroke::Curve);
            }
            if config.show_control_points {
                for segment in spline.control_polygon() {
                    list.push_line(segment, Stroke::ControlPolygon);
                }
            }
        }

        log::debug!(
            "sketch drawn: {} curve(s), {} command(s), {} skipped",
            self.curves.len(),
            list.commands.len(),
            list.skipped.len()
        );
        Ok(list)
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}
