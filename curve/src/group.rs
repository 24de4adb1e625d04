//! Chord-and-tangent group law.
//!
//! `add` and `double` return a [`Construction`]: the sum itself plus the
//! geometry a renderer needs to draw it (the line used and the third
//! intersection R' before its reflection across the x-axis).
//!
//! Every operation is total. Inputs that contradict the curve (for instance a
//! vertical secant through two distinct points that are not negations of each
//! other) yield `Infinity` together with a [`Degeneracy`] report.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::point::Point;
use crate::tolerance::{approx_eq, approx_zero, EPS_ALGEBRAIC};

/// Whether a construction line passes through two points or touches one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Secant,
    Tangent,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LineShape {
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
    /// `x = const`; meets the curve again only at infinity.
    Vertical { x: f64 },
}

/// The secant or tangent line of a chord-and-tangent step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructionLine {
    pub kind: LineKind,
    pub shape: LineShape,
}

impl ConstructionLine {
    fn sloped(kind: LineKind, slope: f64, x0: f64, y0: f64) -> Self {
        ConstructionLine {
            kind,
            shape: LineShape::Sloped {
                slope,
                intercept: y0 - slope * x0,
            },
        }
    }

    fn vertical(kind: LineKind, x: f64) -> Self {
        ConstructionLine {
            kind,
            shape: LineShape::Vertical { x },
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self.shape, LineShape::Vertical { .. })
    }

    /// Height of the line at `x`; `None` for a vertical line.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self.shape {
            LineShape::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineShape::Vertical { .. } => None,
        }
    }
}

/// Inputs under which the group law cannot produce a meaningful point.
///
/// The operands are inconsistent with the curve. The operation still
/// completes and returns `Infinity`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Degeneracy {
    /// Distinct points, not negations of one another, sharing an x-coordinate.
    #[error("vertical secant through distinct non-negating points {p} and {q}")]
    VerticalSecant { p: Point, q: Point },
}

/// Result of a single addition or doubling.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    /// The algebraic result R.
    pub result: Point,
    /// Third intersection R' of the line with the curve, `R = -R'`.
    /// `None` whenever the result is reached without a finite R'.
    pub intermediate: Option<Point>,
    /// Line used by the construction; `None` when an operand is infinity.
    pub line: Option<ConstructionLine>,
    /// Set when the inputs hit a degenerate branch.
    pub degeneracy: Option<Degeneracy>,
}

impl Construction {
    fn identity(result: Point) -> Self {
        Construction {
            result,
            intermediate: None,
            line: None,
            degeneracy: None,
        }
    }

    fn at_infinity(line: ConstructionLine) -> Self {
        Construction {
            result: Point::Infinity,
            intermediate: None,
            line: Some(line),
            degeneracy: None,
        }
    }

    fn degenerate(line: ConstructionLine, degeneracy: Degeneracy) -> Self {
        tracing::error!(%degeneracy, "group law hit a degenerate case, returning infinity");
        Construction {
            result: Point::Infinity,
            intermediate: None,
            line: Some(line),
            degeneracy: Some(degeneracy),
        }
    }

    /// Third intersection of the line with slope `m` through `(x0, y0)`,
    /// at abscissa `x3`, and its reflection.
    fn through(kind: LineKind, m: f64, x0: f64, y0: f64, x3: f64) -> Self {
        let y_i = m * (x3 - x0) + y0;
        Construction {
            result: Point::new(x3, -y_i),
            intermediate: Some(Point::new(x3, y_i)),
            line: Some(ConstructionLine::sloped(kind, m, x0, y0)),
            degeneracy: None,
        }
    }

    /// Turn a reported degeneracy into an error.
    pub fn into_checked(self) -> Result<Self, Degeneracy> {
        match self.degeneracy {
            Some(degeneracy) => Err(degeneracy),
            None => Ok(self),
        }
    }
}

/// Negate a point: reflection across the x-axis.
#[inline]
pub fn negate(p: &Point) -> Point {
    p.negate()
}

/// Add two points on `curve`.
///
/// Cases are tried in order: either operand infinity, mutual negation,
/// equality (delegates to [`double`]), then the generic chord.
pub fn add(p: &Point, q: &Point, curve: &Curve) -> Construction {
    let (px, py, qx, qy) = match (*p, *q) {
        (Point::Infinity, _) => return Construction::identity(*q),
        (_, Point::Infinity) => return Construction::identity(*p),
        (Point::Finite { x: px, y: py }, Point::Finite { x: qx, y: qy }) => (px, py, qx, qy),
    };

    // P + (-P) = O, including P = Q with y = 0
    if approx_eq(px, qx, EPS_ALGEBRAIC) && approx_zero(py + qy, EPS_ALGEBRAIC) {
        return Construction::at_infinity(ConstructionLine::vertical(LineKind::Secant, px));
    }

    if p.approx_eq(q) {
        return double(p, curve);
    }

    // λ = (y2 - y1) / (x2 - x1)
    let denominator = qx - px;
    if approx_zero(denominator, EPS_ALGEBRAIC) {
        return Construction::degenerate(
            ConstructionLine::vertical(LineKind::Secant, px),
            Degeneracy::VerticalSecant { p: *p, q: *q },
        );
    }
    let m = (qy - py) / denominator;

    // x_r = λ^2 - x1 - x2
    let x3 = m * m - px - qx;
    Construction::through(LineKind::Secant, m, px, py, x3)
}

/// Double a point on `curve`.
pub fn double(p: &Point, curve: &Curve) -> Construction {
    let (x, y) = match *p {
        Point::Infinity => return Construction::identity(Point::Infinity),
        Point::Finite { x, y } => (x, y),
    };

    // Vertical tangent: point of order two. Also keeps 2y away from zero.
    if approx_zero(y, EPS_ALGEBRAIC) {
        return Construction::at_infinity(ConstructionLine::vertical(LineKind::Tangent, x));
    }

    // λ = (3x^2 + a) / (2y)
    let m = (3.0 * x * x + curve.a()) / (2.0 * y);

    // x_r = λ^2 - 2x
    let x3 = m * m - 2.0 * x;
    Construction::through(LineKind::Tangent, m, x, y, x3)
}
