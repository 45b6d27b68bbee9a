use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point2 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow the box by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector2::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec2(1.0, 2.0), dvec2(-1.0, 5.0), dvec2(3.0, -1.0)];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec2(-1.0, -1.0));
        assert_eq!(aabb.max, dvec2(3.0, 5.0));
        assert_eq!(aabb.center(), dvec2(1.0, 2.0));
        assert_eq!(aabb.extents(), dvec2(4.0, 6.0));
    }

    #[test]
    fn test_from_no_points() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb2::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert!(aabb.contains_point(dvec2(0.5, 0.5)));
        assert!(aabb.contains_point(dvec2(1.0, 0.0)));
        assert!(!aabb.contains_point(dvec2(1.5, 0.5)));
    }

    #[test]
    fn test_intersects_and_merge() {
        let a = Aabb2::new(dvec2(0.0, 0.0), dvec2(2.0, 2.0));
        let b = Aabb2::new(dvec2(1.0, 1.0), dvec2(3.0, 3.0));
        let c = Aabb2::new(dvec2(5.0, 5.0), dvec2(6.0, 6.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));

        let m = a.merge(&c);
        assert_eq!(m.min, dvec2(0.0, 0.0));
        assert_eq!(m.max, dvec2(6.0, 6.0));
    }

    #[test]
    fn test_expand() {
        let aabb = Aabb2::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0)).expand(5.0);
        assert_eq!(aabb.min, dvec2(-5.0, -5.0));
        assert_eq!(aabb.max, dvec2(6.0, 6.0));
    }
}
