//! Real Weierstrass curves `y^2 = x^3 + a*x + b`.

use core::ops::Deref;
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::tolerance::{approx_zero, EPS_MEMBERSHIP, EPS_SINGULAR};

/// A curve `y^2 = x^3 + a*x + b` over the reals.
///
/// Construction never fails. A singular curve (`|Δ| < EPS_SINGULAR`) is
/// accepted and only flagged, since the caller decides what to do with it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Coefficients")]
pub struct Curve {
    a: f64,
    b: f64,
    discriminant: f64,
}

#[derive(Deserialize)]
struct Coefficients {
    a: f64,
    b: f64,
}

impl From<Coefficients> for Curve {
    fn from(c: Coefficients) -> Self {
        Curve::new(c.a, c.b)
    }
}

impl Curve {
    /// Create a curve and compute its discriminant `-16 * (4a^3 + 27b^2)`.
    pub fn new(a: f64, b: f64) -> Self {
        let discriminant = -16.0 * (4.0 * a * a * a + 27.0 * b * b);
        let curve = Curve { a, b, discriminant };
        if curve.is_singular() {
            tracing::warn!(a, b, discriminant, "curve may be singular, group law not guaranteed");
        }
        curve
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.discriminant
    }

    /// True when `|Δ| < EPS_SINGULAR`. Advisory only.
    #[inline]
    pub fn is_singular(&self) -> bool {
        approx_zero(self.discriminant, EPS_SINGULAR)
    }

    /// Right-hand side of the curve equation, `x^3 + a*x + b`.
    #[inline]
    pub fn rhs(&self, x: f64) -> f64 {
        x * x * x + self.a * x + self.b
    }

    /// Check if a point is on the curve: `|y^2 - (x^3 + a*x + b)| < EPS_MEMBERSHIP`.
    /// Infinity lies on every curve.
    pub fn is_point_on_curve(&self, point: &Point) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Finite { x, y } => approx_zero(y * y - self.rhs(x), EPS_MEMBERSHIP),
        }
    }

    /// Real solutions of `y^2 = x^3 + a*x + b` for the given `x`.
    ///
    /// Two roots come back as `[sqrt(s), -sqrt(s)]`, upper branch first. When
    /// `s` is within `EPS_SINGULAR` of zero the single value `0` is returned.
    /// A negative or non-finite `s` (including a NaN or infinite `x`) has no
    /// real solution.
    pub fn y_values_for(&self, x: f64) -> Ordinates {
        let s = self.rhs(x);
        if !s.is_finite() || s < 0.0 {
            Ordinates::NONE
        } else if approx_zero(s, EPS_SINGULAR) {
            Ordinates::one(0.0)
        } else {
            let y = s.sqrt();
            Ordinates::two(y, -y)
        }
    }

    /// Point of the curve above `x` closest to the height `y`.
    ///
    /// Returns `None` when no real point sits at `x`. Between two branches
    /// the upper one wins only when strictly closer.
    pub fn snap(&self, x: f64, y: f64) -> Option<Point> {
        let ys = self.y_values_for(x);
        let snapped = match *ys {
            [] => return None,
            [only] => only,
            [upper, lower] => {
                if (y - upper).abs() < (y - lower).abs() {
                    upper
                } else {
                    lower
                }
            }
            _ => unreachable!("at most two ordinates per abscissa"),
        };
        Some(Point::new(x, snapped))
    }
}

/// The zero, one or two y-coordinates of a curve above some `x`.
///
/// Dereferences to a slice; index 0 is always the upper branch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ordinates {
    values: [f64; 2],
    len: usize,
}

impl Ordinates {
    const NONE: Self = Ordinates {
        values: [0.0; 2],
        len: 0,
    };

    fn one(y: f64) -> Self {
        Ordinates {
            values: [y, 0.0],
            len: 1,
        }
    }

    fn two(upper: f64, lower: f64) -> Self {
        Ordinates {
            values: [upper, lower],
            len: 2,
        }
    }

    /// Upper branch value, if any.
    pub fn upper(&self) -> Option<f64> {
        self.first().copied()
    }

    /// Lower branch value; equals the upper one when the curve touches `y = 0`.
    pub fn lower(&self) -> Option<f64> {
        self.last().copied()
    }
}

impl Deref for Ordinates {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> Curve {
        Curve::new(-1.0, 1.0)
    }

    #[test]
    fn test_discriminant() {
        let c = curve();
        // -16 * (4 * -1 + 27 * 1) = -368
        assert_eq!(c.discriminant(), -368.0);
        assert!(!c.is_singular());
        assert_eq!(c.a(), -1.0);
        assert_eq!(c.b(), 1.0);
    }

    #[test]
    fn test_singular_curve_is_accepted() {
        let c = Curve::new(0.0, 0.0);
        assert!(c.is_singular());
        assert!(c.is_point_on_curve(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_infinity_on_curve() {
        assert!(curve().is_point_on_curve(&Point::Infinity));
        assert!(Curve::new(0.0, 0.0).is_point_on_curve(&Point::Infinity));
    }

    #[test]
    fn test_membership() {
        let c = curve();
        assert!(c.is_point_on_curve(&Point::new(0.0, 1.0)));
        assert!(c.is_point_on_curve(&Point::new(1.0, -1.0)));
        assert!(!c.is_point_on_curve(&Point::new(0.0, 1.1)));
        // Within the looser membership tolerance.
        assert!(c.is_point_on_curve(&Point::new(0.0, 1.0 + 1e-7)));
    }

    #[test]
    fn test_y_values_two_roots_upper_first() {
        let ys = curve().y_values_for(0.0);
        assert_eq!(&*ys, &[1.0, -1.0]);
        assert_eq!(ys.upper(), Some(1.0));
        assert_eq!(ys.lower(), Some(-1.0));
    }

    #[test]
    fn test_y_values_empty_below_curve() {
        // (-2)^3 + 2 + 1 = -5
        let ys = curve().y_values_for(-2.0);
        assert!(ys.is_empty());
        assert_eq!(ys.upper(), None);
    }

    #[test]
    fn test_y_values_single_root_at_zero() {
        // y^2 = x^3 - x has roots at 0, 1, -1.
        let c = Curve::new(-1.0, 0.0);
        for x in [-1.0, 0.0, 1.0] {
            assert_eq!(&*c.y_values_for(x), &[0.0]);
        }
    }

    #[test]
    fn test_y_values_tolerance_bands() {
        // At x = 0 the right-hand side is exactly b.
        assert_eq!(&*Curve::new(0.0, 1e-12).y_values_for(0.0), &[0.0]);
        assert_eq!(&*Curve::new(0.0, 9e-10).y_values_for(0.0), &[0.0]);
        assert!(Curve::new(0.0, -1e-12).y_values_for(0.0).is_empty());
        assert_eq!(Curve::new(0.0, 2e-9).y_values_for(0.0).len(), 2);
    }

    #[test]
    fn test_y_values_non_finite_abscissa() {
        let c = curve();
        assert!(c.y_values_for(f64::NAN).is_empty());
        assert!(c.y_values_for(f64::INFINITY).is_empty());
        assert!(c.y_values_for(f64::NEG_INFINITY).is_empty());
        assert!(Curve::new(f64::NAN, 1.0).y_values_for(0.0).is_empty());
    }

    #[test]
    fn test_snap_non_finite_abscissa() {
        let c = curve();
        assert_eq!(c.snap(f64::NAN, 0.0), None);
        assert_eq!(c.snap(f64::INFINITY, 1.0), None);
    }

    #[test]
    fn test_snap_picks_nearest_branch() {
        let c = curve();
        assert_eq!(c.snap(0.0, 0.7), Some(Point::new(0.0, 1.0)));
        assert_eq!(c.snap(0.0, -0.2), Some(Point::new(0.0, -1.0)));
        // Equidistant goes to the lower branch.
        assert_eq!(c.snap(0.0, 0.0), Some(Point::new(0.0, -1.0)));
        assert_eq!(c.snap(-2.0, 0.0), None);
        assert_eq!(Curve::new(-1.0, 0.0).snap(1.0, 5.0), Some(Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_serde_recomputes_discriminant() {
        let c = curve();
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Curve = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);

        let from_coeffs: Curve = serde_json::from_str(r#"{"a":0.0,"b":0.0}"#).expect("deserialize");
        assert!(from_coeffs.is_singular());
    }
}
