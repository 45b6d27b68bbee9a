//! Fixed-resolution sampling of Bézier chains into line segments.
//!
//! A chain is a flat control-point list where consecutive pieces share their
//! boundary point: a quadratic chain advances by 2 points per piece, a cubic
//! chain by 3. Each piece is approximated by `resolution` straight segments.

use curvefit_core::{CurveError, Result};
use curvefit_math::Point2;

use crate::curve::{cubic_bezier, quadratic_bezier, Segment};

/// Default number of segments emitted per Bézier piece.
pub const DEFAULT_RESOLUTION: usize = 20;

/// Lazy segment iterator over a Bézier chain.
///
/// Created by [`sample_chain`], [`sample_cubic`] or [`sample_quadratic`].
/// Holds no cache: a clone continues from the same position, and a fresh call
/// with the same inputs yields the same segments.
#[derive(Debug, Clone)]
pub struct SampleChain<'a> {
    control: &'a [Point2],
    degree: usize,
    resolution: usize,
    /// Index of the first control point of the current piece.
    start: usize,
    /// Next sample index within the current piece, in `1..=resolution`.
    step: usize,
    prev: Point2,
}

impl<'a> SampleChain<'a> {
    fn new(control: &'a [Point2], degree: usize, resolution: usize) -> Self {
        Self {
            control,
            degree,
            resolution,
            start: 0,
            step: 1,
            prev: control.first().copied().unwrap_or(Point2::ZERO),
        }
    }

    /// Number of complete pieces in the chain.
    pub fn piece_count(&self) -> usize {
        piece_count(self.control.len(), self.degree)
    }

    fn has_piece(&self, start: usize) -> bool {
        start + self.degree < self.control.len()
    }

    fn evaluate(&self, t: f64) -> Point2 {
        let p = &self.control[self.start..=self.start + self.degree];
        match self.degree {
            2 => quadratic_bezier(t, p[0], p[1], p[2]),
            _ => cubic_bezier(t, p[0], p[1], p[2], p[3]),
        }
    }

    fn remaining(&self) -> usize {
        if !self.has_piece(self.start) {
            return 0;
        }
        let later_pieces = self.piece_count() - self.start / self.degree - 1;
        let later = later_pieces.saturating_mul(self.resolution);
        (self.resolution - self.step + 1).saturating_add(later)
    }
}

impl Iterator for SampleChain<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if !self.has_piece(self.start) {
            return None;
        }

        let t = self.step as f64 / self.resolution as f64;
        let point = self.evaluate(t);
        let segment = Segment::new(self.prev, point);

        if self.step == self.resolution {
            self.start += self.degree;
            self.step = 1;
            if self.has_piece(self.start) {
                self.prev = self.control[self.start];
            }
        } else {
            self.step += 1;
            self.prev = point;
        }

        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SampleChain<'_> {}

impl std::iter::FusedIterator for SampleChain<'_> {}

/// Number of complete pieces of the given degree in a chain of `len` points.
///
/// A trailing group with fewer than `degree + 1` points is not a piece.
pub fn piece_count(len: usize, degree: usize) -> usize {
    if degree == 0 || len <= degree {
        0
    } else {
        (len - 1) / degree
    }
}

/// Sample a Bézier chain of the given `degree` (2 or 3).
///
/// Every complete piece yields exactly `resolution` segments joining the
/// samples at `t = (k - 1) / resolution` and `t = k / resolution` for
/// `k = 1..=resolution`. The first segment of a piece starts at the piece's
/// first control point. An incomplete trailing group is skipped.
pub fn sample_chain(control: &[Point2], degree: usize, resolution: usize) -> Result<SampleChain<'_>> {
    if !(2..=3).contains(&degree) {
        return Err(CurveError::InvalidOperation(format!(
            "unsupported Bezier degree {degree} (expected 2 or 3)"
        )));
    }
    if resolution == 0 {
        return Err(CurveError::InvalidResolution(resolution));
    }
    Ok(SampleChain::new(control, degree, resolution))
}

/// Sample a cubic Bézier chain (4 points per piece, 3 per stride).
pub fn sample_cubic(control: &[Point2], resolution: usize) -> Result<SampleChain<'_>> {
    sample_chain(control, 3, resolution)
}

/// Sample a quadratic Bézier chain (3 points per piece, 2 per stride).
pub fn sample_quadratic(control: &[Point2], resolution: usize) -> Result<SampleChain<'_>> {
    sample_chain(control, 2, resolution)
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
