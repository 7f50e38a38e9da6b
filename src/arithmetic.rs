//! The four basic arithmetic operations over [`Fraction`].
//!
//! All operations are pure and closed over the type: operands are never
//! mutated and every result is a freshly constructed, sign-normalized
//! fraction. Addition and subtraction carry the left operand's reduction
//! policy into the result; multiplication and division always construct
//! with the default eager policy.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::types::{Fraction, FractionError};

type Result<T> = std::result::Result<T, FractionError>;

impl Fraction {
    /// Adds `other` to this fraction over the least common denominator.
    ///
    /// The result inherits this (left) operand's reduction policy, not the
    /// right operand's.
    pub fn add(self, other: Fraction) -> Fraction {
        let denominator = self.lcm(other);
        let numerator = self.numerator * (denominator / self.denominator)
            + other.numerator * (denominator / other.denominator);

        Fraction::build(numerator, denominator, self.reduce)
    }

    /// Subtracts `other` from this fraction.
    ///
    /// Defined as adding the right operand with its numerator negated.
    pub fn subtract(self, other: Fraction) -> Fraction {
        self.add(Fraction::build(-other.numerator, other.denominator, true))
    }

    /// Multiplies this fraction by `other`, numerators and denominators
    /// pairwise.
    ///
    /// The result is always constructed with the default reduction
    /// behavior, regardless of either operand's policy.
    pub fn multiply_by(self, other: Fraction) -> Fraction {
        Fraction::build(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
            true,
        )
    }

    /// Divides this fraction by `other` via multiplication with its
    /// reciprocal.
    ///
    /// # Returns
    /// * The quotient, or [`FractionError::DivisionByZero`] when `other`
    ///   has a zero numerator.
    pub fn divide_by(self, other: Fraction) -> Result<Fraction> {
        Ok(self.multiply_by(other.reciprocal()?))
    }
}

/// Returns `first + second`.
pub fn addition(first: Fraction, second: Fraction) -> Fraction {
    first.add(second)
}

/// Returns `first - second`.
pub fn subtraction(first: Fraction, second: Fraction) -> Fraction {
    first.subtract(second)
}

/// Returns `first * second`.
pub fn multiplication(first: Fraction, second: Fraction) -> Fraction {
    first.multiply_by(second)
}

/// Returns `first / second`, or [`FractionError::DivisionByZero`] when
/// `second` is zero-valued.
pub fn division(first: Fraction, second: Fraction) -> Result<Fraction> {
    first.divide_by(second)
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::add(self, rhs)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self.subtract(rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        self.multiply_by(rhs)
    }
}

impl Div for Fraction {
    type Output = Fraction;

    /// Operator form of [`Fraction::divide_by`].
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero-valued, mirroring integer division; use
    /// [`Fraction::divide_by`] for the checked form.
    fn div(self, rhs: Fraction) -> Fraction {
        match self.divide_by(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("division by a zero-valued fraction"),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}
