//! Session layer and command-line front end for the `realcurve` engine.
//!
//! The engine itself is stateless. This crate keeps what an interactive
//! explorer needs between actions (the current curve, the points P and Q,
//! and the last result) in one [`Session`] value, and renders it as text
//! or JSON.
//!
//! # Example
//!
//! ```
//! use curve_explorer::{Session, Slot};
//! use realcurve::Point;
//!
//! let (session, placement) = Session::default().with_point(Slot::P, Point::new(0.0, 1.0));
//! assert!(placement.on_curve);
//!
//! let session = session.double().expect("P is on the curve");
//! let outcome = session.outcome().expect("outcome");
//! assert!(outcome.result.approx_eq(&Point::new(0.25, -0.875)));
//! ```

mod cli;
mod constants;
mod errors;
mod parse;
mod report;
mod session;

#[cfg(test)]
mod tests;

pub use cli::{Command, ExplorerConfig};
pub use constants::{DEFAULT_A, DEFAULT_B, DEFAULT_SCALAR, DEFAULT_SEED};
pub use errors::{PointParseError, SessionError};
pub use parse::parse_point;
pub use report::{CurveSummary, PlacedPoint, Report};
pub use session::{Operation, Outcome, Placement, Session, Slot};
