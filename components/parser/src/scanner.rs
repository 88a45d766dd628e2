//! Character classification predicates used by the lexer

/// ASCII letter or underscore
pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// ASCII decimal digit
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Any byte that may appear inside a number literal.
///
/// Accepts `.`, `x` and `b` so that fractional and base-prefixed literals are
/// scanned in one pass and classified afterwards.
pub fn is_number_body(ch: u8) -> bool {
    is_digit(ch) || ch == b'.' || ch == b'x' || ch == b'b'
}

/// Contains a `.` and parses as a floating-point literal
pub fn is_float_shape(literal: &str) -> bool {
    literal.contains('.') && literal.parse::<f64>().is_ok()
}

/// Every byte after the two-byte base prefix is in `0..=7`
pub fn is_octal_shape(literal: &str) -> bool {
    digits_after_prefix(literal, b'7')
}

/// Every byte after the two-byte base prefix is `0` or `1`
pub fn is_binary_shape(literal: &str) -> bool {
    digits_after_prefix(literal, b'1')
}

fn digits_after_prefix(literal: &str, max: u8) -> bool {
    literal
        .as_bytes()
        .get(2..)
        .map_or(false, |body| body.iter().all(|&ch| (b'0'..=max).contains(&ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_letter() {
        assert!(is_letter(b'a'));
        assert!(is_letter(b'Z'));
        assert!(is_letter(b'_'));
        assert!(!is_letter(b'1'));
        assert!(!is_letter(b'-'));
    }

    #[test]
    fn test_is_number_body() {
        for ch in b"0123456789.xb" {
            assert!(is_number_body(*ch));
        }
        assert!(!is_number_body(b'o'));
        assert!(!is_number_body(b' '));
    }

    #[test]
    fn test_float_shape() {
        assert!(is_float_shape("3.14"));
        assert!(is_float_shape("1."));
        assert!(!is_float_shape("314"));
        assert!(!is_float_shape("1.2.3"));
    }

    #[test]
    fn test_octal_and_binary_shape() {
        assert!(is_octal_shape("0x1234567"));
        assert!(!is_octal_shape("0x19"));
        assert!(is_binary_shape("0b1010"));
        assert!(!is_binary_shape("0b102"));
        // An empty body after the prefix is vacuously valid
        assert!(is_binary_shape("0b"));
    }
}
