use crate::math;
use crate::types::{Fraction, FractionError};

type Result<T> = std::result::Result<T, FractionError>;

/// Decimal places used when rendering the fractional part of the input.
///
/// The rendering precision is pinned so the reconstruction does not depend
/// on the platform's default float formatting: 14 places keeps the digit
/// string short enough that the scaled numerator stays an exact integer
/// after at most a few trailing digits are dropped.
const FRACTIONAL_DIGITS: usize = 14;

/// Converts a float to the fraction its decimal rendering denotes.
///
/// The fractional part of the absolute value is rendered with
/// [`FRACTIONAL_DIGITS`] decimal places and trailing zeros stripped. The
/// resulting digit string is appended to the integer part scaled by
/// `10^length`; trailing digits are dropped until that candidate numerator
/// is an exact integer. The sign is reapplied at the end and the result is
/// constructed over the denominator `10^length` with the default reduction
/// policy.
///
/// This reconstructs exactly what the decimal literal printed, which may
/// differ from the mathematically closest low-denominator fraction; see
/// [`continued_fraction`](super::continued_fraction) for that alternative.
///
/// # Arguments
/// * `value` - The float to convert.
///
/// # Returns
/// * The reconstructed [`Fraction`], or [`FractionError::Unrepresentable`]
///   when the value is NaN, infinite, or beyond the `i64` range.
///
/// # Examples
/// ```
/// use number_fraction::convert::decimal_expansion;
///
/// let fraction = decimal_expansion(1.2345).unwrap();
/// assert_eq!(fraction.to_string(), "2469/2000");
/// ```
pub fn decimal_expansion(value: f64) -> Result<Fraction> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(FractionError::Unrepresentable(value));
    }

    // Keep the original sign so the numerator can carry it at the end.
    let negative = value < 0.0;
    let value = value.abs();

    // Split into the integer part and the fractional remainder in [0, 1).
    let integer = math::floor(value) as f64;
    let fractional = value - integer;

    // Render the remainder and keep the digits after the point, without
    // trailing zeros. A remainder that rounds up to 1.0 leaves no digits
    // and the integer part alone survives.
    let rendered = format!("{:.precision$}", fractional, precision = FRACTIONAL_DIGITS);
    let mut digits = match rendered.split_once('.') {
        Some((_, tail)) => tail.trim_end_matches('0'),
        None => "",
    };

    // Drop trailing digits until the scaled candidate is an exact integer.
    let (numerator, length) = loop {
        let length = digits.len() as u32;
        let candidate = integer * 10f64.powi(length as i32) + digits_value(digits);

        if is_exact_integer(candidate) {
            break (candidate as i64, length);
        }

        digits = &digits[..digits.len() - 1];
    };

    let numerator = if negative { -numerator } else { numerator };
    let denominator = 10_i64.pow(length);

    Fraction::new(numerator, denominator)
}

/// The numeric value of a digit-only string; zero when empty.
fn digits_value(digits: &str) -> f64 {
    digits
        .bytes()
        .fold(0.0, |value, digit| value * 10.0 + (digit - b'0') as f64)
}

/// True when the float is an integer value that survives a round trip
/// through `i64` unchanged.
fn is_exact_integer(value: f64) -> bool {
    value == (value as i64) as f64
}
