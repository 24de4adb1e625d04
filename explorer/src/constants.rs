//! Defaults used when the explorer starts or is reset.

/// Coefficient `a` of the default curve `y^2 = x^3 - x + 1`.
pub const DEFAULT_A: f64 = -1.0;

/// Coefficient `b` of the default curve `y^2 = x^3 - x + 1`.
pub const DEFAULT_B: f64 = 1.0;

/// Scalar offered for multiplication when none is given.
pub const DEFAULT_SCALAR: i64 = 3;

/// Seed used by the `random` command when none is given.
pub const DEFAULT_SEED: u64 = 42;
