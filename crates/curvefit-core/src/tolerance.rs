/// Linear tolerance for distance checks on curve data, in input units.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// Check if a distance is zero within tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(0.0));
        assert!(tol.is_zero(-1e-10));
        assert!(!tol.is_zero(1e-6));
    }

    #[test]
    fn test_custom_tolerance() {
        let tol = Tolerance::new(0.5);
        assert!(tol.is_zero(0.5));
        assert!(!tol.is_zero(0.51));
    }
}
