//! Elementary integer helpers shared by the fraction type.
//!
//! This module collects the scalar operations the fraction code is built on:
//! absolute value, floor/ceiling conversion, greatest common divisor, least
//! common multiple, and two-value min/max.

/// Returns the absolute value of the argument.
pub fn abs(value: i64) -> i64 {
    value.abs()
}

/// Returns the largest integer less than or equal to the argument.
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Returns the smallest integer greater than or equal to the argument.
pub fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

/// Returns the greatest common divisor (gcd) of two values.
///
/// Defined by `gcd(a, 0) = a` and `gcd(a, b) = gcd(b, a % b)`. The result
/// inherits the sign behavior of the `%` operator, so a negative first
/// operand can produce a negative result; callers that need a non-negative
/// divisor take [`abs`] themselves.
pub fn gcd(first: i64, second: i64) -> i64 {
    if second == 0 {
        first
    } else {
        gcd(second, first % second)
    }
}

/// Returns the least common multiple (lcm) of two values.
///
/// # Panics
///
/// Panics when both arguments are zero: `gcd(0, 0)` is zero and the scaled
/// product cannot be divided by it. Callers must not pass two zeros.
pub fn lcm(first: i64, second: i64) -> i64 {
    abs(first * second) / gcd(first, second)
}

/// Returns the smaller of two values.
pub fn min(first: i64, second: i64) -> i64 {
    if first < second { first } else { second }
}

/// Returns the greater of two values.
pub fn max(first: i64, second: i64) -> i64 {
    if first > second { first } else { second }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(0), 0);
        assert_eq!(abs(7), 7);
        assert_eq!(abs(-7), 7);
    }

    #[test]
    fn test_floor_and_ceil() {
        assert_eq!(floor(1.9), 1);
        assert_eq!(floor(-1.1), -2);
        assert_eq!(floor(2.0), 2);
        assert_eq!(ceil(1.1), 2);
        assert_eq!(ceil(-1.9), -1);
        assert_eq!(ceil(2.0), 2);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(8, 16), 8);
        assert_eq!(gcd(3, 9), 3);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_gcd_follows_remainder_sign() {
        // A negative first operand flows through the remainder operator
        // unchanged; the result keeps its sign.
        assert_eq!(gcd(-25, 10), -5);
        assert_eq!(gcd(-8, 16), -8);
        assert_eq!(gcd(25, -10), 5);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(2, 3), 6);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(-4, 6), 12);
        assert_eq!(lcm(5, 0), 0);
    }

    #[test]
    #[should_panic]
    fn test_lcm_of_two_zeros_panics() {
        lcm(0, 0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(min(-1, -2), -2);
        assert_eq!(max(1, 2), 2);
        assert_eq!(max(-1, -2), -1);
        assert_eq!(min(3, 3), 3);
        assert_eq!(max(3, 3), 3);
    }
}
