//! Headless drawing model for fitted curves.
//!
//! A [`Sketch`] holds the interpolation points of several curves; drawing it
//! produces a [`DrawList`] that any 2D backend can replay.

pub mod draw;
pub mod sketch;

// Re-export main types
pub use draw::{DrawCommand, DrawList, Stroke};
pub use sketch::{Sketch, SketchConfig};
