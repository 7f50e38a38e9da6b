use crate::math;
use crate::types::{Fraction, FractionError};

type Result<T> = std::result::Result<T, FractionError>;

/// Default relative tolerance for the approximation loop.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Converts a float to an approximating fraction via continued fractions.
///
/// Successive convergents `h/k` of the continued-fraction expansion of the
/// absolute value are produced until `|value - h/k| <= |value| * tolerance`;
/// the sign is reapplied to the final numerator. The result usually has a
/// far smaller denominator than the one
/// [`decimal_expansion`](super::decimal_expansion) reconstructs.
///
/// Termination is only guaranteed for tolerances reachable within `f64`
/// precision; a tolerance of zero may never be met for values that are not
/// exactly representable.
///
/// # Arguments
/// * `value` - The float to convert.
/// * `tolerance` - Relative error bound for the approximation.
///
/// # Returns
/// * The approximating [`Fraction`], or [`FractionError::Unrepresentable`]
///   when the value is NaN or infinite.
///
/// # Examples
/// ```
/// use number_fraction::convert::{DEFAULT_TOLERANCE, continued_fraction};
///
/// let fraction = continued_fraction(1.2345, DEFAULT_TOLERANCE).unwrap();
/// assert_eq!(fraction.to_string(), "2011/1629");
/// ```
pub fn continued_fraction(value: f64, tolerance: f64) -> Result<Fraction> {
    if !value.is_finite() {
        return Err(FractionError::Unrepresentable(value));
    }

    let negative = value < 0.0;
    let value = value.abs();

    // Convergent state: h1/k1 is the current approximation and h2/k2 the
    // previous one.
    let mut h1: i64 = 1;
    let mut h2: i64 = 0;
    let mut k1: i64 = 0;
    let mut k2: i64 = 1;
    let mut b = 1.0 / value;

    loop {
        b = 1.0 / b;
        let a = math::floor(b);

        let numerator = a * h1 + h2;
        h2 = h1;
        h1 = numerator;

        let denominator = a * k1 + k2;
        k2 = k1;
        k1 = denominator;

        b -= a as f64;

        if (value - h1 as f64 / k1 as f64).abs() <= value * tolerance {
            break;
        }
    }

    let numerator = if negative { -h1 } else { h1 };

    Fraction::new(numerator, k1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_small_denominators() {
        let fraction = continued_fraction(1.2345, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.numerator(), 2011);
        assert_eq!(fraction.denominator(), 1629);

        // An expansion that terminates on the exact input keeps it.
        let fraction = continued_fraction(0.3333, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.numerator(), 3333);
        assert_eq!(fraction.denominator(), 10000);
    }

    #[test]
    fn test_keeps_sign_in_numerator() {
        let fraction = continued_fraction(-2.5, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.numerator(), -5);
        assert_eq!(fraction.denominator(), 2);
    }

    #[test]
    fn test_exact_values_terminate_immediately() {
        let fraction = continued_fraction(3.0, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.to_string(), "3/1");

        let fraction = continued_fraction(0.125, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.to_string(), "1/8");

        let fraction = continued_fraction(0.0, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.to_string(), "0/1");
    }

    #[test]
    fn test_classic_approximations() {
        // The fourth convergent of pi is the first inside the default
        // relative tolerance.
        let fraction = continued_fraction(std::f64::consts::PI, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.to_string(), "355/113");

        let fraction = continued_fraction(std::f64::consts::SQRT_2, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(fraction.to_string(), "1393/985");
    }

    #[test]
    fn test_looser_tolerance_gives_coarser_fractions() {
        let fraction = continued_fraction(std::f64::consts::PI, 1e-3).unwrap();
        assert_eq!(fraction.to_string(), "22/7");
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(matches!(
            continued_fraction(f64::NAN, DEFAULT_TOLERANCE),
            Err(FractionError::Unrepresentable(_))
        ));
        assert!(matches!(
            continued_fraction(f64::NEG_INFINITY, DEFAULT_TOLERANCE),
            Err(FractionError::Unrepresentable(_))
        ));
    }
}
