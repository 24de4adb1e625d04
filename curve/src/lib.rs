//! Geometric group law on real elliptic curves `y^2 = x^3 + a*x + b`.
//!
//! This crate provides the curve and point value types, the chord-and-tangent
//! addition and doubling (with the construction geometry a renderer needs),
//! double-and-add scalar multiplication, and helpers for random sampling.
//! Arithmetic is over `f64`; all comparisons go through the tolerances in
//! the `tolerance` module.

mod curve;
mod group;
mod point;
mod random;
mod scalar;
pub mod tolerance;

pub use curve::{Curve, Ordinates};
pub use group::{
    add, double, negate, Construction, ConstructionLine, Degeneracy, LineKind, LineShape,
};
pub use point::{Point, DEFAULT_PRECISION};
pub use random::{RandomPoint, DEFAULT_SAMPLE_RANGE};
pub use scalar::{mul_u64, scalar_multiply, truncate_scalar};
