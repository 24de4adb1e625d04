//! The explorer's application state as a single immutable value.
//!
//! Every transition borrows the current session and returns a new one, so a
//! front end can keep history, compare states or discard a failed step
//! without undoing partial updates.

use core::fmt;
use realcurve::{
    add, double, scalar_multiply, truncate_scalar, Construction, ConstructionLine, Curve,
    Degeneracy, Point,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_A, DEFAULT_B};
use crate::errors::SessionError;

/// Which of the two user-placed points an action refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    P,
    Q,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::P => f.write_str("P"),
            Slot::Q => f.write_str("Q"),
        }
    }
}

/// The group operation behind an [`Outcome`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Double,
    ScalarMultiply { k: i64 },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => f.write_str("P + Q"),
            Operation::Double => f.write_str("2P"),
            Operation::ScalarMultiply { k } => write!(f, "{k} * P"),
        }
    }
}

/// Last computed result together with what is needed to draw it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub operation: Operation,
    pub result: Point,
    /// R' before reflection; never set for scalar multiplication.
    pub intermediate: Option<Point>,
    /// Secant or tangent; never set for scalar multiplication.
    pub line: Option<ConstructionLine>,
    pub degeneracy: Option<Degeneracy>,
}

impl Outcome {
    fn from_construction(operation: Operation, construction: Construction) -> Self {
        Outcome {
            operation,
            result: construction.result,
            intermediate: construction.intermediate,
            line: construction.line,
            degeneracy: construction.degeneracy,
        }
    }
}

/// Where a point landed when it was placed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub slot: Slot,
    pub point: Point,
    pub on_curve: bool,
}

/// Curve, the points P and Q, and the last outcome.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    curve: Curve,
    p: Option<Point>,
    q: Option<Point>,
    outcome: Option<Outcome>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Curve::new(DEFAULT_A, DEFAULT_B))
    }
}

impl Session {
    /// A session on `curve` with no points placed.
    pub fn new(curve: Curve) -> Self {
        Session {
            curve,
            p: None,
            q: None,
            outcome: None,
        }
    }

    /// Back to the default curve with nothing placed.
    pub fn reset() -> Self {
        Self::default()
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    #[inline]
    pub fn point(&self, slot: Slot) -> Option<Point> {
        match slot {
            Slot::P => self.p,
            Slot::Q => self.q,
        }
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Switch to another curve. Placed points would not lie on it, so they
    /// are dropped along with the outcome.
    pub fn with_curve(&self, curve: Curve) -> Self {
        Session::new(curve)
    }

    /// Place `point` into `slot`, clearing any previous outcome.
    ///
    /// Off-curve points are kept so they can still be shown; operations
    /// refuse them.
    pub fn with_point(&self, slot: Slot, point: Point) -> (Self, Placement) {
        let on_curve = self.curve.is_point_on_curve(&point);
        if !on_curve {
            tracing::warn!(%slot, %point, "placed point is not on the current curve");
        }

        let mut next = Session {
            outcome: None,
            ..*self
        };
        match slot {
            Slot::P => next.p = Some(point),
            Slot::Q => next.q = Some(point),
        }

        (
            next,
            Placement {
                slot,
                point,
                on_curve,
            },
        )
    }

    /// Place the curve point nearest to the pointer position `(x, y)`.
    ///
    /// P is filled first; once P is a usable on-curve point, Q is filled.
    pub fn select_at(&self, x: f64, y: f64) -> Result<(Self, Placement), SessionError> {
        let point = self
            .curve
            .snap(x, y)
            .ok_or(SessionError::NoCurvePointAt { x })?;
        let slot = if self.operand(Slot::P).is_ok() {
            Slot::Q
        } else {
            Slot::P
        };
        Ok(self.with_point(slot, point))
    }

    /// True when `P + Q` can be computed.
    pub fn can_add(&self) -> bool {
        self.operand(Slot::P).is_ok() && self.operand(Slot::Q).is_ok()
    }

    /// True when `2P` and `k * P` can be computed.
    pub fn can_double(&self) -> bool {
        self.operand(Slot::P).is_ok()
    }

    /// Compute `P + Q`.
    pub fn add(&self) -> Result<Self, SessionError> {
        let p = self.operand(Slot::P)?;
        let q = self.operand(Slot::Q)?;
        let construction = add(&p, &q, &self.curve);
        tracing::debug!(%p, %q, result = %construction.result, "added points");
        Ok(self.with_outcome(Outcome::from_construction(Operation::Add, construction)))
    }

    /// Compute `2P`.
    pub fn double(&self) -> Result<Self, SessionError> {
        let p = self.operand(Slot::P)?;
        let construction = double(&p, &self.curve);
        tracing::debug!(%p, result = %construction.result, "doubled point");
        Ok(self.with_outcome(Outcome::from_construction(Operation::Double, construction)))
    }

    /// Compute `k * P`, truncating `k` toward zero.
    pub fn scalar_multiply(&self, k: f64) -> Result<Self, SessionError> {
        let k = truncate_scalar(k).ok_or(SessionError::InvalidScalar(k))?;
        let p = self.operand(Slot::P)?;
        let result = scalar_multiply(k, &p, &self.curve);
        tracing::debug!(k, %p, %result, "multiplied point");
        Ok(self.with_outcome(Outcome {
            operation: Operation::ScalarMultiply { k },
            result,
            intermediate: None,
            line: None,
            degeneracy: None,
        }))
    }

    fn with_outcome(&self, outcome: Outcome) -> Self {
        Session {
            outcome: Some(outcome),
            ..*self
        }
    }

    /// A placed, finite, on-curve point, or the reason it is unusable.
    fn operand(&self, slot: Slot) -> Result<Point, SessionError> {
        let point = self
            .point(slot)
            .ok_or(SessionError::MissingPoint(slot))?;
        if point.is_infinity() {
            return Err(SessionError::PointAtInfinity(slot));
        }
        if !self.curve.is_point_on_curve(&point) {
            return Err(SessionError::NotOnCurve(slot));
        }
        Ok(point)
    }
}
