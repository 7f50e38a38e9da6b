use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

/// Parse an optional minus sign, returning whether one was present
pub fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(literal("-"))
        .map(|sign| sign.is_some())
        .parse_next(input)
}

/// Parse an unsigned run of decimal digits as an integer
pub fn parse_integer(input: &mut &str) -> ModalResult<i64> {
    digit1.parse_to().parse_next(input)
}

/// Parse the separating slash
pub fn parse_slash(input: &mut &str) -> ModalResult<()> {
    literal("/").void().parse_next(input)
}
