//! Error types for the explorer session.

use crate::session::Slot;

/// Reasons an operation on the session is refused.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The operation needs a point that has not been placed.
    #[error("point {0} is not set")]
    MissingPoint(Slot),
    /// Operands must be finite; the explorer never places O directly.
    #[error("point {0} is the point at infinity")]
    PointAtInfinity(Slot),
    /// The operand was placed but does not satisfy the curve equation.
    #[error("point {0} is not on the current curve")]
    NotOnCurve(Slot),
    /// Snapping found no real point above the requested abscissa.
    #[error("no curve point at x = {x}")]
    NoCurvePointAt { x: f64 },
    /// The scalar is NaN or infinite.
    #[error("invalid scalar value {0}")]
    InvalidScalar(f64),
}

/// Errors raised while reading a point from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointParseError {
    #[error("expected `x,y` or `O`, got {0:?}")]
    Malformed(String),
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}
