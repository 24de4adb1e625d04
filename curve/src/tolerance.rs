//! Floating-point tolerances shared by every comparison in the engine.
//!
//! Algebraic comparisons (point equality, mutual negation, vertical lines,
//! singularity) use `1e-9`. Curve membership compares `y^2` against
//! `x^3 + ax + b` and uses the looser `1e-6`.

/// Tolerance for point equality, mutual negation and vertical-line detection.
pub const EPS_ALGEBRAIC: f64 = 1e-9;

/// Tolerance below which the discriminant (or `x^3 + ax + b`) counts as zero.
pub const EPS_SINGULAR: f64 = 1e-9;

/// Tolerance for the curve membership test.
pub const EPS_MEMBERSHIP: f64 = 1e-6;

/// Returns true if `|value| < eps`.
#[inline]
pub fn approx_zero(value: f64, eps: f64) -> bool {
    value.abs() < eps
}

/// Returns true if `|lhs - rhs| < eps`.
#[inline]
pub fn approx_eq(lhs: f64, rhs: f64, eps: f64) -> bool {
    approx_zero(lhs - rhs, eps)
}
