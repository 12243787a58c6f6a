// ============================================================================
// Radix Bridges
// Exact conversion between sezimal and the dozenal (12) and niftimal (36) bases
// ============================================================================
//
// Both target bases share prime factors with six, so every terminating
// sezimal numeral has a terminating dozenal and niftimal form and back.
// Conversion runs on plain digit vectors; no engine arithmetic is involved.

use super::normalizer::{split_point, split_sign};
use crate::engine::{Digits, Magnitude, Sign};
use crate::numeric::tables::RADIX;
use crate::numeric::{NumericError, NumericResult};

const DOZENAL: u32 = 12;
const NIFTIMAL: u32 = 36;

/// Output alphabet for radices up to 36
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Integer digits (most significant first) rewritten from `from` into `to`,
/// by repeated short division.
fn convert_integer(digits: &[u8], from: u32, to: u32) -> Digits {
    let mut dividend: Digits = digits.iter().copied().collect();
    let mut lsb = Digits::new();

    loop {
        let mut remainder = 0u32;
        let mut quotient = Digits::with_capacity(dividend.len());
        for &d in &dividend {
            let acc = remainder * from + u32::from(d);
            let q = acc / to;
            remainder = acc % to;
            if q != 0 || !quotient.is_empty() {
                quotient.push(q as u8);
            }
        }
        lsb.push(remainder as u8);
        if quotient.is_empty() {
            break;
        }
        dividend = quotient;
    }

    lsb.reverse();
    lsb
}

/// Fractional digits rewritten from `from` into `to` by repeated
/// multiplication. Stops when the fraction is exhausted or `limit` digits
/// have been produced; never emits trailing zeros.
fn convert_fraction(digits: &[u8], from: u32, to: u32, limit: usize) -> Digits {
    let mut fraction: Digits = digits.iter().copied().collect();
    let mut out = Digits::new();

    while out.len() < limit && fraction.iter().any(|&d| d != 0) {
        let mut carry = 0u32;
        for d in fraction.iter_mut().rev() {
            let acc = u32::from(*d) * to + carry;
            *d = (acc % from) as u8;
            carry = acc / from;
        }
        out.push(carry as u8);
    }
    out
}

fn render(sign: Sign, integer: &[u8], fraction: &[u8]) -> String {
    let mut text = String::with_capacity(integer.len() + fraction.len() + 2);
    if sign.is_negative() {
        text.push('-');
    }
    text.extend(integer.iter().map(|&d| ALPHABET[d as usize] as char));
    if !fraction.is_empty() {
        text.push('.');
        text.extend(fraction.iter().map(|&d| ALPHABET[d as usize] as char));
    }
    text
}

/// Formats a signed magnitude in `radix`, exactly.
fn format_in(sign: Sign, magnitude: &Magnitude, radix: u32) -> String {
    let magnitude = magnitude.trimmed();
    let integer = convert_integer(magnitude.integer(), u32::from(RADIX), radix);
    let fraction = convert_fraction(
        magnitude.fraction(),
        u32::from(RADIX),
        radix,
        magnitude.precision(),
    );
    let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
    render(sign, &integer, &fraction)
}

/// Parses numeral text written in `radix` into a sezimal sign and magnitude.
fn parse_in(
    text: &str,
    radix: u32,
    digit_value: impl Fn(char) -> Option<u8> + Copy,
) -> NumericResult<(Sign, Magnitude)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumericError::validation(text, "empty numeral"));
    }
    let (sign, body) = split_sign(trimmed);
    let (integer, fraction) = split_point(text, body, digit_value)?;

    let integer = convert_integer(&integer, radix, u32::from(RADIX));
    // A radix-n fraction of k digits needs at most 2k sezimal digits here
    let fraction = convert_fraction(&fraction, radix, u32::from(RADIX), fraction.len() * 2);

    let magnitude = Magnitude::new(integer, fraction);
    let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
    Ok((sign, magnitude))
}

// ============================================================================
// Dozenal
// ============================================================================

fn dozenal_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| d as u8),
        'A' | 'a' | '↊' => Some(10),
        'B' | 'b' | '↋' => Some(11),
        _ => None,
    }
}

/// Dozenal (base 12) form of a sezimal value, using `A` and `B` for ten
/// and eleven.
pub fn to_dozenal(sign: Sign, magnitude: &Magnitude) -> String {
    format_in(sign, magnitude, DOZENAL)
}

/// Reads a dozenal numeral. Accepts `A`/`B` (either case) or the
/// dedicated `↊`/`↋` digits, and `_` group separators.
///
/// # Errors
/// `Validation` for illegal characters or a malformed numeral.
pub fn from_dozenal(text: &str) -> NumericResult<(Sign, Magnitude)> {
    parse_in(text, DOZENAL, dozenal_digit)
}

// ============================================================================
// Niftimal
// ============================================================================

fn niftimal_digit(c: char) -> Option<u8> {
    c.to_digit(NIFTIMAL).map(|d| d as u8)
}

/// Niftimal (base 36) form of a sezimal value, digits `0-9A-Z`.
///
/// Each niftimal digit stands for one pair of sezimal digits.
pub fn to_niftimal(sign: Sign, magnitude: &Magnitude) -> String {
    format_in(sign, magnitude, NIFTIMAL)
}

/// Reads a niftimal numeral (digits `0-9A-Z`, either case).
///
/// # Errors
/// `Validation` for illegal characters or a malformed numeral.
pub fn from_niftimal(text: &str) -> NumericResult<(Sign, Magnitude)> {
    parse_in(text, NIFTIMAL, niftimal_digit)
}
