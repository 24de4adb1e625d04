//! Snapshots of a session for display: aligned text or JSON.

use core::fmt::Write;
use realcurve::{Curve, LineKind, LineShape, Point};
use serde::Serialize;

use crate::session::{Outcome, Session, Slot};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CurveSummary {
    pub a: f64,
    pub b: f64,
    pub discriminant: f64,
    pub singular: bool,
}

impl From<&Curve> for CurveSummary {
    fn from(curve: &Curve) -> Self {
        CurveSummary {
            a: curve.a(),
            b: curve.b(),
            discriminant: curve.discriminant(),
            singular: curve.is_singular(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PlacedPoint {
    pub point: Point,
    pub on_curve: bool,
}

/// Everything a front end shows about a session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub curve: CurveSummary,
    pub p: Option<PlacedPoint>,
    pub q: Option<PlacedPoint>,
    pub outcome: Option<Outcome>,
}

impl Report {
    pub fn new(session: &Session) -> Self {
        let placed = |slot| {
            session.point(slot).map(|point| PlacedPoint {
                point,
                on_curve: session.curve().is_point_on_curve(&point),
            })
        };
        Report {
            curve: CurveSummary::from(session.curve()),
            p: placed(Slot::P),
            q: placed(Slot::Q),
            outcome: session.outcome().copied(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable rendering with `precision` decimals.
    pub fn render_text(&self, precision: usize) -> String {
        let mut out = String::new();
        let c = &self.curve;
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "curve: y^2 = x^3 + ({:.*})x + ({:.*})",
            precision, c.a, precision, c.b
        );
        let _ = writeln!(out, "discriminant: {:.*}", precision, c.discriminant);
        if c.singular {
            let _ = writeln!(out, "warning: curve is singular, operations may fail");
        }

        for (name, placed) in [("P", self.p), ("Q", self.q)] {
            if let Some(placed) = placed {
                let note = if placed.on_curve { "" } else { " (not on curve)" };
                let _ = writeln!(out, "{name} = {:.*}{note}", precision, placed.point);
            }
        }

        if let Some(outcome) = &self.outcome {
            let _ = writeln!(out, "operation: {}", outcome.operation);
            if let Some(line) = &outcome.line {
                let kind = match line.kind {
                    LineKind::Secant => "secant",
                    LineKind::Tangent => "tangent",
                };
                let _ = match line.shape {
                    LineShape::Sloped { slope, intercept } => writeln!(
                        out,
                        "{kind}: y = {:.*}x + ({:.*})",
                        precision, slope, precision, intercept
                    ),
                    LineShape::Vertical { x } => writeln!(out, "{kind}: x = {:.*}", precision, x),
                };
            }
            if let Some(r_prime) = &outcome.intermediate {
                let _ = writeln!(out, "R' = {:.*}", precision, r_prime);
            }
            let _ = writeln!(out, "R = {:.*}", precision, outcome.result);
            if let Some(degeneracy) = &outcome.degeneracy {
                let _ = writeln!(out, "error: {degeneracy}");
            }
        }

        out
    }
}
