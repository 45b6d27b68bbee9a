pub mod aabb;
pub mod line;
pub mod vector;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use line::Line2;
pub use vector::{
    distance, dot, norm, normalize, project_point_on_line, project_point_on_line_fac,
};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
