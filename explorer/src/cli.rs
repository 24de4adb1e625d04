//! Command-line configuration and dispatch.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use realcurve::{Curve, Point, RandomPoint, DEFAULT_PRECISION};

use crate::constants::{DEFAULT_A, DEFAULT_B, DEFAULT_SCALAR, DEFAULT_SEED};
use crate::parse::{parse_coordinate, parse_point};
use crate::report::Report;
use crate::session::{Session, Slot};

/// Explore the chord-and-tangent group law of y^2 = x^3 + ax + b over the reals.
#[derive(Debug, Parser)]
#[command(name = "curve-explorer", version)]
pub struct ExplorerConfig {
    /// Coefficient a of the curve
    #[arg(short = 'a', long, default_value_t = DEFAULT_A, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub a: f64,

    /// Coefficient b of the curve
    #[arg(short = 'b', long, default_value_t = DEFAULT_B, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub b: f64,

    /// Decimals shown for coordinates in text output
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the curve and its discriminant
    Info,
    /// List the y-coordinates of the curve above x
    Ys {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        x: f64,
    },
    /// Snap a position to the nearest curve point and place it as P
    Snap {
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        y: f64,
    },
    /// Compute P + Q
    Add {
        /// First point, `x,y` or `O`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p: Point,
        /// Second point, `x,y` or `O`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        q: Point,
    },
    /// Compute 2P
    Double {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p: Point,
    },
    /// Compute k * P by double-and-add; k is truncated toward zero
    Mul {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p: Point,
        #[arg(short = 'k', long, default_value_t = DEFAULT_SCALAR as f64, allow_hyphen_values = true)]
        k: f64,
    },
    /// Place a random curve point as P
    Random {
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

impl ExplorerConfig {
    /// Run the configured command and return what should be printed.
    pub fn run(&self) -> Result<String> {
        let session = Session::new(Curve::new(self.a, self.b));

        let session = match &self.command {
            Command::Info => session,
            Command::Ys { x } => return self.render_ordinates(session.curve(), *x),
            Command::Snap { x, y } => session.select_at(*x, *y)?.0,
            Command::Add { p, q } => {
                let (session, _) = session.with_point(Slot::P, *p);
                let (session, _) = session.with_point(Slot::Q, *q);
                session.add()?
            }
            Command::Double { p } => session.with_point(Slot::P, *p).0.double()?,
            Command::Mul { p, k } => session.with_point(Slot::P, *p).0.scalar_multiply(*k)?,
            Command::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                let Some(point) = session.curve().random_point(&mut rng) else {
                    bail!("no curve point found for seed {seed}");
                };
                session.with_point(Slot::P, point).0
            }
        };

        self.render(&Report::new(&session))
    }

    fn render(&self, report: &Report) -> Result<String> {
        if self.json {
            Ok(report.to_json()?)
        } else {
            Ok(report.render_text(self.precision))
        }
    }

    fn render_ordinates(&self, curve: &Curve, x: f64) -> Result<String> {
        let ys = curve.y_values_for(x);
        if self.json {
            return Ok(serde_json::to_string(&*ys)?);
        }
        if ys.is_empty() {
            return Ok(format!("no real point at x = {:.*}\n", self.precision, x));
        }
        let listed: Vec<String> = ys
            .iter()
            .map(|y| format!("{:.*}", self.precision, y))
            .collect();
        Ok(format!("y = {}\n", listed.join(", ")))
    }
}
