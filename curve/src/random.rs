use core::ops::Range;
use rand::distr::Uniform;
use rand::Rng;

use crate::{Curve, Point};

/// Abscissa window used by [`RandomPoint::random_point`].
pub const DEFAULT_SAMPLE_RANGE: Range<f64> = -5.0..5.0;

const MAX_ATTEMPTS: usize = 64;

/// Helper trait for sampling random points on a curve.
pub trait RandomPoint {
    /// Sample a finite on-curve point with `x` in [`DEFAULT_SAMPLE_RANGE`].
    #[inline]
    fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        self.random_point_in(rng, DEFAULT_SAMPLE_RANGE)
    }

    /// Sample a finite on-curve point with `x` drawn uniformly from `range`.
    ///
    /// Returns `None` if the range is empty or not finite, or if no point
    /// was hit after a bounded number of draws.
    fn random_point_in<R: Rng + ?Sized>(&self, rng: &mut R, range: Range<f64>) -> Option<Point>;
}

impl RandomPoint for Curve {
    fn random_point_in<R: Rng + ?Sized>(&self, rng: &mut R, range: Range<f64>) -> Option<Point> {
        // Rejects empty, NaN and infinite bounds, and windows wider than f64::MAX.
        let Ok(abscissa) = Uniform::new(range.start, range.end) else {
            tracing::debug!(?range, "unusable sampling window");
            return None;
        };

        for _ in 0..MAX_ATTEMPTS {
            let x = rng.sample(&abscissa);
            let ys = self.y_values_for(x);
            let y = match *ys {
                [] => continue,
                [only] => only,
                [upper, lower] => {
                    if rng.random_bool(0.5) {
                        upper
                    } else {
                        lower
                    }
                }
                _ => unreachable!("at most two ordinates per abscissa"),
            };
            return Some(Point::new(x, y));
        }

        tracing::debug!(?range, "no curve point found in sampling window");
        None
    }
}
