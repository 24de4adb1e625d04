//! Double-and-add scalar multiplication.

use crate::curve::Curve;
use crate::group::{add, double};
use crate::point::Point;

/// Compute `k * P` by double-and-add over the bits of `|k|`.
///
/// A negative `k` multiplies `-P` by `-k`. Only the final point is returned;
/// the constructions of the individual steps are discarded.
pub fn scalar_multiply(k: i64, p: &Point, curve: &Curve) -> Point {
    if k < 0 {
        return mul_u64(k.unsigned_abs(), &p.negate(), curve);
    }
    mul_u64(k as u64, p, curve)
}

/// Compute `n * P` for a non-negative scalar.
pub fn mul_u64(n: u64, p: &Point, curve: &Curve) -> Point {
    if n == 0 || p.is_infinity() {
        return Point::Infinity;
    }

    let mut result = Point::Infinity;
    let mut temp = *p;
    let mut bits = n;

    while bits > 0 {
        if bits & 1 == 1 {
            result = add(&result, &temp, curve).result;
        }
        temp = double(&temp, curve).result;
        bits >>= 1;
    }

    result
}

/// Truncate a real scalar toward zero.
///
/// Non-finite values have no integer part and yield `None`; out-of-range
/// values saturate to `i64::MIN` / `i64::MAX`.
pub fn truncate_scalar(k: f64) -> Option<i64> {
    if !k.is_finite() {
        return None;
    }
    Some(k.trunc() as i64)
}
