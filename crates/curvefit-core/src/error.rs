use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("Degenerate vector: cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("Invalid resolution: {0} (must be at least 1)")]
    InvalidResolution(usize),

    #[error("Invalid curvature factor: {0} (must be finite and non-negative)")]
    InvalidCurvature(f64),

    #[error("Non-finite coordinate in input point #{index}")]
    NonFinitePoint { index: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;
