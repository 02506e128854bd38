//! Error kinds raised by point and shape operations.
//!
//! All variants are raised eagerly at the point of violation and propagated
//! unchanged; only the binary converts them into a printed line.

use thiserror::Error;

use crate::shapes::ShapeKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A coordinate is NaN or infinite.
    #[error("point coordinates must be finite numbers, got ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    /// A geometric parameter of a shape is out of its domain.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Collinearity slack is negative or not finite.
    #[error("orientation tolerance must be a finite non-negative number, got {eps}")]
    InvalidTolerance { eps: f64 },

    /// `intersects` was called on a pair of shapes it does not support.
    #[error("intersection is only supported between a square and a pentagon, got {lhs} and {rhs}")]
    UnsupportedComparison { lhs: ShapeKind, rhs: ShapeKind },
}

pub type Result<T> = std::result::Result<T, ShapeError>;
