//! The fraction value type and its invariants.
//!
//! A [`Fraction`] wraps a `numerator/denominator` pair of machine integers.
//! The denominator is never zero and is kept strictly positive; the sign of
//! the value lives in the numerator. Construction optionally simplifies the
//! pair to lowest terms, controlled by a per-instance policy flag.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::math;
use crate::parser::parse_fraction;

/// Error type for fraction operations
#[derive(Debug, Clone, PartialEq)]
pub enum FractionError {
    /// A denominator of zero was supplied or produced (direct construction,
    /// the reciprocal of a zero-valued fraction, or division by one).
    DivisionByZero,
    /// A textual form did not match the canonical `"n/d"` pattern.
    InvalidFormat(String),
    /// A float that has no machine-integer fraction equivalent (NaN,
    /// infinite, or beyond the `i64` range) was given to a conversion.
    Unrepresentable(f64),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::DivisionByZero => write!(f, "the denominator must not be zero"),
            FractionError::InvalidFormat(input) => {
                write!(f, "invalid fraction literal: '{}'", input)
            }
            FractionError::Unrepresentable(value) => {
                write!(f, "cannot represent {} as a fraction of machine integers", value)
            }
        }
    }
}

impl std::error::Error for FractionError {}

type Result<T> = std::result::Result<T, FractionError>;

/// An exact rational number stored as a `numerator/denominator` pair.
///
/// Fractions are immutable values: every operation returns a new instance
/// and never touches its operands. After construction the denominator is
/// always positive (a negative denominator moves its sign into the
/// numerator) and never zero.
///
/// The `reduce` policy decides whether construction eagerly simplifies the
/// pair to lowest terms. Addition and subtraction results inherit the policy
/// of their left operand; a non-reduced fraction stays non-reduced until
/// [`Fraction::reduce`] is called.
///
/// # Examples
/// ```
/// use number_fraction::Fraction;
///
/// let half = Fraction::new(8, 16).unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    pub(crate) numerator: i64,
    pub(crate) denominator: i64,
    pub(crate) reduce: bool,
}

impl Fraction {
    /// Creates a fraction from a numerator and denominator, simplified to
    /// lowest terms.
    ///
    /// # Arguments
    /// * `numerator` - The numerator of the fraction.
    /// * `denominator` - The denominator of the fraction.
    ///
    /// # Returns
    /// * The new fraction, or [`FractionError::DivisionByZero`] when the
    ///   denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::with_reduce(numerator, denominator, true)
    }

    /// Creates a fraction with an explicit reduction policy.
    ///
    /// When `reduce` is `false` the pair is stored as given (after sign
    /// normalization) and stays that way until [`Fraction::reduce`] is
    /// called explicitly.
    pub fn with_reduce(numerator: i64, denominator: i64, reduce: bool) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        Ok(Self::build(numerator, denominator, reduce))
    }

    /// Creates a whole-number fraction `n/1`.
    pub fn from_integer(numerator: i64) -> Self {
        Self::build(numerator, 1, true)
    }

    /// Constructor for denominators already known to be non-zero.
    pub(crate) fn build(mut numerator: i64, mut denominator: i64, reduce: bool) -> Self {
        debug_assert!(denominator != 0);

        if denominator < 0 {
            // The sign of the whole fraction lives in the numerator.
            numerator = -numerator;
            denominator = -denominator;
        }

        let mut fraction = Fraction {
            numerator,
            denominator,
            reduce,
        };

        if reduce {
            let gcd = fraction.gcd();
            if gcd > 1 {
                fraction.numerator /= gcd;
                fraction.denominator /= gcd;
            }
        }

        fraction
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns the value of this fraction as a float.
    pub fn float_value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns the value of this fraction truncated toward zero.
    pub fn int_value(&self) -> i64 {
        self.float_value() as i64
    }

    /// Returns the greatest common divisor of the stored numerator and
    /// denominator.
    pub fn gcd(&self) -> i64 {
        math::gcd(self.numerator, self.denominator)
    }

    /// Returns the least common multiple of this fraction's denominator and
    /// `other`'s denominator.
    ///
    /// This is the common denominator used by addition and comparison, not
    /// a general rational lcm.
    pub fn lcm(self, other: Fraction) -> i64 {
        math::lcm(self.denominator, other.denominator)
    }

    /// Checks whether this fraction is in lowest terms.
    pub fn is_reduced(&self) -> bool {
        self.gcd() == 1
    }

    /// Returns this fraction simplified to lowest terms.
    ///
    /// Returns the value unchanged when the gcd of the stored pair does not
    /// exceed one.
    pub fn reduce(self) -> Fraction {
        let gcd = self.gcd();

        if gcd > 1 {
            Self::build(self.numerator / gcd, self.denominator / gcd, true)
        } else {
            self
        }
    }

    /// Returns the negation of this fraction.
    pub fn negate(self) -> Fraction {
        Self::build(-self.numerator, self.denominator, true)
    }

    /// Returns the reciprocal of this fraction (denominator over numerator).
    ///
    /// # Returns
    /// * The swapped fraction, or [`FractionError::DivisionByZero`] when the
    ///   numerator is zero, since the swapped pair would have a zero
    ///   denominator.
    pub fn reciprocal(self) -> Result<Fraction> {
        Self::with_reduce(self.denominator, self.numerator, true)
    }

    /// Returns the positive equivalent of this fraction: the value itself
    /// when it is non-negative, its negation otherwise.
    pub fn abs(self) -> Fraction {
        if self.float_value() >= 0.0 {
            self
        } else {
            self.negate()
        }
    }
}

impl fmt::Display for Fraction {
    /// Formats as `"numerator/denominator"` using the stored pair, which
    /// may reveal a non-reduced state when the policy is lazy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_fraction(s)
    }
}

impl PartialEq for Fraction {
    /// Value equality: two fractions are equal when their quotients are,
    /// independent of reduction state. `2/4` equals `1/2`.
    fn eq(&self, other: &Self) -> bool {
        self.float_value() == other.float_value()
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// Three-way comparison: both numerators are scaled to the common
    /// denominator `lcm(d1, d2)` and compared exactly.
    fn cmp(&self, other: &Self) -> Ordering {
        let lcm = math::lcm(self.denominator, other.denominator);
        let first = self.numerator * (lcm / self.denominator);
        let second = other.numerator * (lcm / other.denominator);

        first.cmp(&second)
    }
}
