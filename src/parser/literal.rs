use winnow::ascii::space0;
use winnow::combinator::preceded;
use winnow::{ModalResult, Parser};

use crate::parser::combinators::{parse_integer, parse_sign, parse_slash};
use crate::types::{Fraction, FractionError};

type Result<T> = std::result::Result<T, FractionError>;

/// Parse a fraction from its canonical textual form
///
/// This is the main public API entry point of this module. The accepted
/// pattern is `(-)?\s*\d+\s*/\s*(-)?\s*\d+` with surrounding whitespace
/// trimmed first. Exactly one minus sign makes the result negative; zero or
/// two minus signs make it positive (two negatives cancel).
///
/// # Arguments
/// * `input` - The string to parse, e.g. `"2/3"`, `"-2/3"` or `"2 / -3"`
///
/// # Returns
/// * The parsed [`Fraction`] (constructed with the default reduction
///   policy), [`FractionError::InvalidFormat`] when the input does not
///   match the pattern, or [`FractionError::DivisionByZero`] when the
///   denominator part is zero
///
/// # Examples
/// ```
/// use number_fraction::parse_fraction;
///
/// let half = parse_fraction("4/8").unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// ```
pub fn parse_fraction(input: &str) -> Result<Fraction> {
    let (numerator_negative, numerator, denominator_negative, denominator) = fraction_literal
        .parse(input.trim())
        .map_err(|_| FractionError::InvalidFormat(input.to_string()))?;

    // Exactly one '-' sign makes the fraction negative; two cancel out.
    let numerator = if numerator_negative != denominator_negative {
        -numerator
    } else {
        numerator
    };

    Fraction::new(numerator, denominator)
}

/// The complete literal: sign, numerator digits, slash, sign, denominator
/// digits, with optional whitespace after each sign and around the slash
fn fraction_literal(input: &mut &str) -> ModalResult<(bool, i64, bool, i64)> {
    (
        parse_sign,
        preceded(space0, parse_integer),
        preceded(space0, parse_slash),
        preceded(space0, parse_sign),
        preceded(space0, parse_integer),
    )
        .map(|(numerator_negative, numerator, (), denominator_negative, denominator)| {
            (numerator_negative, numerator, denominator_negative, denominator)
        })
        .parse_next(input)
}
