// ============================================================================
// Numeral Normalizer
// Parses sezimal numeral text into a canonical sign and magnitude
// ============================================================================
//
// Grammar:
//   numeral    := [sign] digits ["." digits] [exponent]
//   sign       := "-" | "+"
//   digits     := ( "0".."5" | "_" )+     at least one digit, "_" is dropped
//   exponent   := ("e" | "E") [sign] decimal-digits
//
// The exponent shifts the sezimal point; it is written in decimal.

use crate::engine::{Digits, Magnitude, Sign};
use crate::numeric::tables::MAX_DIGIT;
use crate::numeric::{NumericError, NumericResult};

/// Characters accepted between the two sides of a ratio literal
pub const RATIO_SEPARATORS: [char; 3] = ['/', '⁄', '÷'];

/// Digit-group separator stripped from every digit run
pub const GROUP_SEPARATOR: char = '_';

/// Largest accepted scientific exponent, in either direction
pub const MAX_EXPONENT: i64 = 10_000;

/// Canonical result of parsing a numeral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumeral {
    pub sign: Sign,
    pub magnitude: Magnitude,
}

/// Splits a ratio literal (`a/b`, `a⁄b` or `a÷b`) into its two sides.
pub fn split_ratio(text: &str) -> Option<(&str, &str)> {
    let position = text.find(RATIO_SEPARATORS)?;
    let separator = text[position..].chars().next()?;
    Some((
        text[..position].trim(),
        text[position + separator.len_utf8()..].trim(),
    ))
}

/// Whether the text is a ratio literal rather than a plain numeral
#[inline]
pub fn is_ratio(text: &str) -> bool {
    text.contains(RATIO_SEPARATORS)
}

/// Strips an optional leading sign.
pub(crate) fn split_sign(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, text)
    }
}

/// Reads one run of digits, dropping group separators.
///
/// `digit_value` maps a character to its digit value in the target radix.
pub(crate) fn digit_run(
    input: &str,
    run: &str,
    digit_value: impl Fn(char) -> Option<u8>,
) -> NumericResult<Digits> {
    let mut digits = Digits::with_capacity(run.len());
    for c in run.chars() {
        if c == GROUP_SEPARATOR {
            continue;
        }
        let d = digit_value(c).ok_or_else(|| NumericError::validation(input, "illegal character"))?;
        digits.push(d);
    }
    if digits.is_empty() {
        return Err(NumericError::validation(input, "empty digit run"));
    }
    Ok(digits)
}

/// Splits `integer[.fraction]` and reads both runs.
pub(crate) fn split_point(
    input: &str,
    body: &str,
    digit_value: impl Fn(char) -> Option<u8> + Copy,
) -> NumericResult<(Digits, Digits)> {
    let mut parts = body.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(NumericError::validation(input, "multiple decimal points"));
    }

    let integer = digit_run(input, integer, digit_value)?;
    let fraction = match fraction {
        Some(run) => digit_run(input, run, digit_value)?,
        None => Digits::new(),
    };
    Ok((integer, fraction))
}

fn sezimal_digit(c: char) -> Option<u8> {
    c.to_digit(10)
        .map(|d| d as u8)
        .filter(|&d| d <= MAX_DIGIT)
}

fn parse_exponent(input: &str, text: &str) -> NumericResult<i64> {
    let (sign, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::validation(input, "malformed exponent"));
    }
    let magnitude: i64 = digits
        .parse()
        .map_err(|_| NumericError::validation(input, "exponent out of range"))?;
    if magnitude > MAX_EXPONENT {
        return Err(NumericError::validation(input, "exponent out of range"));
    }
    Ok(if sign.is_negative() { -magnitude } else { magnitude })
}

/// Moves the sezimal point `exponent` places to the right (left if negative).
fn shift_point(integer: Digits, fraction: Digits, exponent: i64) -> Magnitude {
    if exponent == 0 {
        return Magnitude::new(integer, fraction);
    }

    let mut digits: Digits = integer.iter().chain(fraction.iter()).copied().collect();
    // exponent is bounded by MAX_EXPONENT, so the point stays addressable
    let mut point = integer.len() as i64 + exponent;
    if point < 0 {
        let mut padded: Digits = smallvec::smallvec![0; point.unsigned_abs() as usize];
        padded.extend(digits);
        digits = padded;
        point = 0;
    }
    let point = point as usize;
    if point > digits.len() {
        digits.resize(point, 0);
    }
    Magnitude::new(digits[..point].iter().copied(), digits[point..].iter().copied())
}

/// Parses sezimal numeral text into a canonical sign and magnitude.
///
/// Leading integer zeros are removed; trailing fractional zeros are kept.
/// Negative zero is normalized to positive.
///
/// # Errors
/// `Validation` for illegal characters, multiple decimal points, empty digit
/// runs or a malformed exponent.
pub fn parse_numeral(text: &str) -> NumericResult<ParsedNumeral> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumericError::validation(text, "empty numeral"));
    }

    let (sign, body) = split_sign(trimmed);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(position) => (&body[..position], parse_exponent(text, &body[position + 1..])?),
        None => (body, 0),
    };

    let (integer, fraction) = split_point(text, mantissa, sezimal_digit)?;
    let magnitude = shift_point(integer, fraction, exponent);
    let sign = if magnitude.is_zero() { Sign::Positive } else { sign };

    Ok(ParsedNumeral { sign, magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::magnitude::mag;

    fn parse(text: &str) -> (Sign, String) {
        let parsed = parse_numeral(text).unwrap();
        (parsed.sign, parsed.magnitude.to_string())
    }

    fn reason(text: &str) -> &'static str {
        match parse_numeral(text) {
            Err(NumericError::Validation { reason, .. }) => reason,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse("0"), (Sign::Positive, "0".to_string()));
        assert_eq!(parse("012"), (Sign::Positive, "12".to_string()));
        assert_eq!(parse("-5.430"), (Sign::Negative, "5.430".to_string()));
        assert_eq!(parse("+3"), (Sign::Positive, "3".to_string()));
        assert_eq!(parse("  21.1  "), (Sign::Positive, "21.1".to_string()));
    }

    #[test]
    fn test_parse_strips_group_separators() {
        assert_eq!(parse("1_0000"), (Sign::Positive, "10000".to_string()));
        assert_eq!(parse("454_2533_2014.0503_3"), (Sign::Positive, "45425332014.05033".to_string()));
    }

    #[test]
    fn test_negative_zero_is_positive() {
        assert_eq!(parse("-0"), (Sign::Positive, "0".to_string()));
        assert_eq!(parse("-0.00"), (Sign::Positive, "0.00".to_string()));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse("1e-3"), (Sign::Positive, "0.001".to_string()));
        assert_eq!(parse("1E+2"), (Sign::Positive, "100".to_string()));
        assert_eq!(parse("1.5e1"), (Sign::Positive, "15".to_string()));
        assert_eq!(parse("-12.34e-1"), (Sign::Negative, "1.234".to_string()));
        assert_eq!(parse("1.2345e2"), (Sign::Positive, "123.45".to_string()));
        assert_eq!(parse("3e0"), (Sign::Positive, "3".to_string()));
        assert_eq!(parse("1e12").1, "1000000000000");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(reason(""), "empty numeral");
        assert_eq!(reason("-"), "empty digit run");
        assert_eq!(reason("12.3.4"), "multiple decimal points");
        assert_eq!(reason("16"), "illegal character");
        assert_eq!(reason("1a"), "illegal character");
        assert_eq!(reason(".5"), "empty digit run");
        assert_eq!(reason("5."), "empty digit run");
        assert_eq!(reason("1e"), "malformed exponent");
        assert_eq!(reason("1e1.5"), "malformed exponent");
        assert_eq!(reason("1e99999"), "exponent out of range");
    }

    #[test]
    fn test_validation_error_keeps_input() {
        assert_eq!(
            parse_numeral("12x"),
            Err(NumericError::Validation {
                input: "12x".to_string(),
                reason: "illegal character",
            })
        );
    }

    #[test]
    fn test_split_ratio() {
        assert_eq!(split_ratio("1/3"), Some(("1", "3")));
        assert_eq!(split_ratio("10 ⁄ 4"), Some(("10", "4")));
        assert_eq!(split_ratio("-2÷5"), Some(("-2", "5")));
        assert_eq!(split_ratio("12.3"), None);
        assert!(is_ratio("1/2"));
        assert!(!is_ratio("1.2"));
    }

    #[test]
    fn test_shift_point_keeps_digits() {
        assert_eq!(shift_point(smallvec::smallvec![1, 2], smallvec::smallvec![3], -3), mag("0.0123"));
    }
}
