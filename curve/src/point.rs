use core::fmt;
use core::ops::Neg;
use serde::{Deserialize, Serialize};

use crate::tolerance::{approx_eq, approx_zero, EPS_ALGEBRAIC};

/// Number of decimals used by `Display` when no precision is requested.
pub const DEFAULT_PRECISION: usize = 4;

/// A point on a real elliptic curve, or the point at infinity.
///
/// A point does not carry its curve: membership is checked with
/// [`Curve::is_point_on_curve`](crate::Curve::is_point_on_curve).
///
/// The derived `PartialEq` is exact. Use [`Point::approx_eq`] for the
/// tolerant comparison the group law relies on.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Point {
    /// The identity element O.
    Infinity,
    /// A point with affine coordinates (x, y).
    Finite { x: f64, y: f64 },
}

impl Point {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Point::Infinity;

    /// Create a new finite point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point::Finite { x, y }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Coordinates of a finite point, `None` for infinity.
    #[inline]
    pub fn coords(&self) -> Option<(f64, f64)> {
        match *self {
            Point::Infinity => None,
            Point::Finite { x, y } => Some((x, y)),
        }
    }

    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.coords().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.coords().map(|(_, y)| y)
    }

    /// Tolerant equality: finite points match when both coordinates are within
    /// `EPS_ALGEBRAIC`; infinity only equals infinity.
    pub fn approx_eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Point::Infinity, Point::Infinity) => true,
            (Point::Finite { x: x1, y: y1 }, Point::Finite { x: x2, y: y2 }) => {
                approx_eq(x1, x2, EPS_ALGEBRAIC) && approx_eq(y1, y2, EPS_ALGEBRAIC)
            }
            _ => false,
        }
    }

    /// Reflection across the x-axis.
    #[inline]
    pub fn negate(&self) -> Self {
        match *self {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => Point::Finite { x, y: -y },
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

struct Coordinate(f64, usize);

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if approx_zero(self.0, EPS_ALGEBRAIC) {
            f.write_str("0")
        } else {
            write!(f, "{:.*}", self.1, self.0)
        }
    }
}

/// Finite points print as `(x, y)` with [`DEFAULT_PRECISION`] decimals unless
/// the formatter asks for another precision; infinity prints as `O`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Point::Infinity => f.write_str("O"),
            Point::Finite { x, y } => {
                let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
                write!(f, "({}, {})", Coordinate(x, precision), Coordinate(y, precision))
            }
        }
    }
}
