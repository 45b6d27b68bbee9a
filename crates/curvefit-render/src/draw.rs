use curvefit_geometry::Segment;
use curvefit_math::{Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// How a line should be stroked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    /// The fitted curve itself
    Curve,
    /// Lines between consecutive control points, conventionally dashed
    ControlPolygon,
}

impl Stroke {
    pub fn is_dashed(self) -> bool {
        matches!(self, Stroke::ControlPolygon)
    }
}

/// A backend-neutral drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        start: Point2,
        end: Point2,
        stroke: Stroke,
    },
    /// Circle outline around an interpolation point
    Marker { center: Point2, radius: f64 },
}

impl DrawCommand {
    pub fn bounds(&self) -> Aabb2 {
        match *self {
            DrawCommand::Line { start, end, .. } => Aabb2::new(start.min(end), start.max(end)),
            DrawCommand::Marker { center, radius } => {
                let r = Vector2::splat(radius);
                Aabb2::new(center - r, center + r)
            }
        }
    }
}

/// Ordered drawing commands for one frame, plus the curves that could not be fitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Indices of sketch curves skipped because their fit failed
    pub skipped: Vec<usize>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, segment: Segment, stroke: Stroke) {
        self.commands.push(DrawCommand::Line {
            start: segment.start,
            end: segment.end,
            stroke,
        });
    }

    pub fn push_marker(&mut self, center: Point2, radius: f64) {
        self.commands.push(DrawCommand::Marker { center, radius });
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Lines drawn with the given stroke, in order.
    pub fn lines(&self, stroke: Stroke) -> impl Iterator<Item = Segment> + '_ {
        self.commands.iter().filter_map(move |cmd| match *cmd {
            DrawCommand::Line { start, end, stroke: s } if s == stroke => {
                Some(Segment::new(start, end))
            }
            _ => None,
        })
    }

    pub fn line_count(&self, stroke: Stroke) -> usize {
        self.lines(stroke).count()
    }

    pub fn marker_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Marker { .. }))
            .count()
    }

    /// Bounds of everything drawn, markers included.
    pub fn bounds(&self) -> Option<Aabb2> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|a, b| a.merge(&b))
    }
}
