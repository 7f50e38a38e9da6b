//! Fraction literal parsing module
//!
//! This module is responsible for parsing the canonical `"n/d"` textual form
//! into a [`Fraction`](crate::types::Fraction).
//! The main entry point is the `parse_fraction` function.

mod combinators;
mod literal;

pub use literal::parse_fraction;
