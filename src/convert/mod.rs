//! Float to fraction conversion
//!
//! Two deliberately different strategies. [`decimal_expansion`] reconstructs
//! the fraction the decimal rendering of the float denotes, while
//! [`continued_fraction`] searches for a close approximation with a small
//! denominator: `1.2345` becomes `2469/2000` through the first and
//! `2011/1629` through the second. The divergence is intentional and both
//! entry points are kept.

mod continued_fraction;
mod decimal_expansion;

pub use continued_fraction::{DEFAULT_TOLERANCE, continued_fraction};
pub use decimal_expansion::decimal_expansion;

use crate::types::{Fraction, FractionError};

type Result<T> = std::result::Result<T, FractionError>;

impl Fraction {
    /// Converts a float to a fraction, keeping the maximal precision the
    /// decimal rendering of the value carries.
    ///
    /// See [`decimal_expansion`] for the algorithm.
    pub fn from_float(value: f64) -> Result<Fraction> {
        decimal_expansion(value)
    }

    /// Converts a float to an approximating fraction via continued
    /// fractions, with the default tolerance of [`DEFAULT_TOLERANCE`].
    ///
    /// See [`continued_fraction`] for the algorithm.
    pub fn from_float_continued(value: f64) -> Result<Fraction> {
        continued_fraction(value, DEFAULT_TOLERANCE)
    }

    /// Converts a float to an approximating fraction via continued
    /// fractions, stopping once the result is within `value * tolerance`
    /// of the input.
    pub fn from_float_with_tolerance(value: f64, tolerance: f64) -> Result<Fraction> {
        continued_fraction(value, tolerance)
    }
}
