//! Integer literal conversion
//!
//! [`parse_int_auto`] detects the base from the literal's prefix the way
//! integer literals conventionally do: `0x` hex, `0o` octal, `0b` binary, a
//! bare leading `0` legacy octal, decimal otherwise. Underscores may separate
//! digits. The result must fit in an `i64`.

use std::num::ParseIntError;
use thiserror::Error;

/// Why an integer literal could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegerError {
    /// No digits after the sign or base prefix
    #[error("no digits")]
    Empty,
    /// `_` not placed between two digits
    #[error("misplaced digit separator")]
    Separator,
    /// Sign after the base prefix or a doubled sign
    #[error("unexpected sign")]
    Sign,
    /// Digit outside the base, or magnitude beyond 64 bits
    #[error(transparent)]
    Digits(#[from] ParseIntError),
    /// Magnitude fits in 64 bits but not in a signed 64-bit value
    #[error("value out of range")]
    OutOfRange,
}

/// Convert literal text to an `i64`, detecting the base from its prefix
pub fn parse_int_auto(literal: &str) -> Result<i64, IntegerError> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let bytes = unsigned.as_bytes();
    let (radix, digits, prefixed) = if bytes.len() > 1 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &unsigned[2..], true),
            b'o' | b'O' => (8, &unsigned[2..], true),
            b'b' | b'B' => (2, &unsigned[2..], true),
            _ => (8, &unsigned[1..], true),
        }
    } else {
        (10, unsigned, false)
    };

    let digits = strip_separators(digits, prefixed)?;
    let magnitude = u64::from_str_radix(&digits, radix)?;
    apply_sign(magnitude, negative)
}

/// Convert bare digits in the given radix to an `i64`
pub fn parse_int_radix(digits: &str, radix: u32) -> Result<i64, IntegerError> {
    if digits.is_empty() {
        return Err(IntegerError::Empty);
    }
    let magnitude = u64::from_str_radix(digits, radix)?;
    apply_sign(magnitude, false)
}

/// Remove `_` separators; after a base prefix a leading `_` is allowed
fn strip_separators(digits: &str, prefixed: bool) -> Result<String, IntegerError> {
    if digits.is_empty() {
        return Err(IntegerError::Empty);
    }
    // `from_str_radix` would accept a second sign here
    if digits.starts_with(|ch: char| ch == '+' || ch == '-') {
        return Err(IntegerError::Sign);
    }
    if !digits.contains('_') {
        return Ok(digits.to_string());
    }
    let bytes = digits.as_bytes();
    let leading_ok = prefixed || bytes[0] != b'_';
    let misplaced = !leading_ok
        || bytes[bytes.len() - 1] == b'_'
        || bytes.windows(2).any(|pair| pair == b"__");
    if misplaced {
        return Err(IntegerError::Separator);
    }
    let stripped: String = digits.chars().filter(|&ch| ch != '_').collect();
    if stripped.is_empty() {
        return Err(IntegerError::Empty);
    }
    Ok(stripped)
}

fn apply_sign(magnitude: u64, negative: bool) -> Result<i64, IntegerError> {
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| IntegerError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_int_auto("0"), Ok(0));
        assert_eq!(parse_int_auto("838383"), Ok(838383));
        assert_eq!(parse_int_auto("-42"), Ok(-42));
        assert_eq!(parse_int_auto("1_000"), Ok(1000));
    }

    #[test]
    fn test_prefixed_bases() {
        assert_eq!(parse_int_auto("0x1F"), Ok(31));
        assert_eq!(parse_int_auto("0o17"), Ok(15));
        assert_eq!(parse_int_auto("0b101"), Ok(5));
        assert_eq!(parse_int_auto("017"), Ok(15));
        assert_eq!(parse_int_auto("0x_ff"), Ok(255));
    }

    #[test]
    fn test_rejects_bad_digits() {
        assert!(matches!(parse_int_auto("09"), Err(IntegerError::Digits(_))));
        assert!(matches!(parse_int_auto("1.5"), Err(IntegerError::Digits(_))));
        assert!(matches!(parse_int_auto("12x3"), Err(IntegerError::Digits(_))));
        assert_eq!(parse_int_auto(""), Err(IntegerError::Empty));
        assert_eq!(parse_int_auto("0x"), Err(IntegerError::Empty));
    }

    #[test]
    fn test_rejects_misplaced_separators() {
        assert_eq!(parse_int_auto("_1"), Err(IntegerError::Separator));
        assert_eq!(parse_int_auto("1_"), Err(IntegerError::Separator));
        assert_eq!(parse_int_auto("1__0"), Err(IntegerError::Separator));
        assert_eq!(parse_int_auto("--1"), Err(IntegerError::Sign));
        assert_eq!(parse_int_auto("0x+1"), Err(IntegerError::Sign));
    }

    #[test]
    fn test_range() {
        assert_eq!(parse_int_auto("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_int_auto("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_int_auto("9223372036854775808"),
            Err(IntegerError::OutOfRange)
        );
        assert!(matches!(
            parse_int_auto("99999999999999999999"),
            Err(IntegerError::Digits(_))
        ));
    }

    #[test]
    fn test_radix() {
        assert_eq!(parse_int_radix("17", 8), Ok(15));
        assert_eq!(parse_int_radix("101", 2), Ok(5));
        assert_eq!(parse_int_radix("", 2), Err(IntegerError::Empty));
    }
}
