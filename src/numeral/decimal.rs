// ============================================================================
// Decimal Bridge
// Conversion between sezimal magnitudes and arbitrary-precision decimals
// ============================================================================

use crate::domain::config::PrecisionContext;
use crate::engine::{round, Digits, Magnitude, Sign};
use crate::numeric::tables::RADIX;
use crate::numeric::{NumericError, NumericResult};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

/// Significant digits a `rust_decimal::Decimal` always holds
const RUST_DECIMAL_DIGITS: i64 = 28;

/// Places a quotient carries past the context's decimal scale
const QUOTIENT_GUARD_PLACES: i64 = 10;

/// Decimal places that resolve `digits` fractional sezimal digits plus one
/// guard digit, with two places to spare. Uses `log10(6) < 0.7782`.
pub fn scale_for(digits: usize) -> i64 {
    let places = ((digits + 1) * 7_782).div_ceil(10_000) + 2;
    places as i64
}

fn ten_pow(places: i64) -> BigUint {
    BigUint::from(10u32).pow(places.unsigned_abs() as u32)
}

/// Most-significant-first digits read as a base-6 integer
fn radix_value(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &d| acc * u32::from(RADIX) + u32::from(d))
}

/// Decimal value of a signed sezimal magnitude.
///
/// The integer part is always exact. A fraction whose decimal expansion
/// terminates is exact too; any other fraction is rounded half-up to
/// [`scale_for`] the larger of its own precision and the context's maximum,
/// which is enough for [`from_decimal`] to restore every digit. Trailing
/// decimal zeros are removed.
pub fn to_decimal(sign: Sign, magnitude: &Magnitude, ctx: &PrecisionContext) -> BigDecimal {
    let integer = radix_value(magnitude.integer());
    let fraction = magnitude.fraction();

    let (mantissa, scale) = if fraction.iter().all(|&d| d == 0) {
        (integer, 0)
    } else {
        let numerator = radix_value(fraction);
        let denominator = BigUint::from(RADIX).pow(fraction.len() as u32);

        // F / 6^k terminates in decimal iff 3^k divides F
        let places = fraction.len() as i64;
        let exact = &numerator * ten_pow(places);
        if (&exact % &denominator).is_zero() {
            (integer * ten_pow(places) + exact / &denominator, places)
        } else {
            let places = scale_for(fraction.len().max(ctx.max_precision));
            let doubled = numerator * ten_pow(places) * 2u32 + &denominator;
            (integer * ten_pow(places) + doubled / (denominator * 2u32), places)
        }
    };

    let sign = if sign.is_negative() {
        BigSign::Minus
    } else {
        BigSign::Plus
    };
    BigDecimal::new(BigInt::from_biguint(sign, mantissa), scale).normalized()
}

/// Sezimal sign and magnitude of a decimal value.
///
/// The integer part converts exactly. The fraction is expanded one sezimal
/// digit past the context's maximum precision, with a sticky digit standing
/// in for any remainder, then rounded to the maximum precision. Trailing
/// fractional zeros are removed.
pub fn from_decimal(value: &BigDecimal, ctx: &PrecisionContext) -> (Sign, Magnitude) {
    let (mantissa, exponent) = value.as_bigint_and_exponent();
    let negative = mantissa.sign() == BigSign::Minus;
    let mantissa = mantissa.magnitude().clone();

    let (integer, mut remainder, unit) = if exponent <= 0 {
        (mantissa * ten_pow(exponent), BigUint::zero(), BigUint::one())
    } else {
        let unit = ten_pow(exponent);
        (&mantissa / &unit, mantissa % &unit, unit)
    };

    let mut fraction = Digits::new();
    while !remainder.is_zero() && fraction.len() <= ctx.max_precision {
        remainder *= u32::from(RADIX);
        let mut digit = 0;
        while remainder >= unit {
            remainder -= &unit;
            digit += 1;
        }
        fraction.push(digit);
    }
    if !remainder.is_zero() {
        fraction.push(1);
    }

    let magnitude = Magnitude::new(integer.to_radix_be(u32::from(RADIX)), fraction);
    let magnitude = round(&magnitude, ctx.max_precision).trimmed();

    let sign = if negative && !magnitude.is_zero() {
        Sign::Negative
    } else {
        Sign::Positive
    };
    (sign, magnitude)
}

// ============================================================================
// Decimal Division
// ============================================================================

/// `numerator / denominator` rounded half away from zero to `scale` places.
/// The denominator must be non-zero.
pub fn div_scaled(numerator: &BigDecimal, denominator: &BigDecimal, scale: i64) -> BigDecimal {
    let (n, n_scale) = numerator.as_bigint_and_exponent();
    let (d, d_scale) = denominator.as_bigint_and_exponent();

    let shift = scale + d_scale - n_scale;
    let ten = BigInt::from(10u32);
    let (n, d) = if shift >= 0 {
        (n * ten.pow(shift as u32), d)
    } else {
        (n, d * ten.pow(shift.unsigned_abs() as u32))
    };

    let mut quotient = &n / &d;
    let remainder = &n - &quotient * &d;
    if remainder.abs() * 2u32 >= d.abs() {
        if n.is_negative() != d.is_negative() {
            quotient -= BigInt::one();
        } else {
            quotient += BigInt::one();
        }
    }
    BigDecimal::new(quotient, scale)
}

/// Sezimal sign and magnitude of `numerator / denominator`, divided in the
/// decimal domain with guard places past the context's decimal scale and
/// then converted by [`from_decimal`]. The denominator must be non-zero.
pub fn quotient(
    numerator: &BigDecimal,
    denominator: &BigDecimal,
    ctx: &PrecisionContext,
) -> (Sign, Magnitude) {
    debug_assert!(!denominator.is_zero());
    let scale = scale_for(ctx.max_precision) + QUOTIENT_GUARD_PLACES;
    from_decimal(&div_scaled(numerator, denominator, scale), ctx)
}

// ============================================================================
// rust_decimal Interop
// ============================================================================

/// Narrows a decimal to `rust_decimal::Decimal`, rounding half-even to the
/// 28 significant digits it holds.
///
/// # Errors
/// `DecimalRange` if the integer part alone needs more than 28 digits.
pub fn to_rust_decimal(value: &BigDecimal) -> NumericResult<Decimal> {
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = (value.digits() as i64 - scale).max(0);
    let places = scale.min(RUST_DECIMAL_DIGITS - integer_digits).max(0);

    let (mantissa, places) = value
        .with_scale_round(places, RoundingMode::HalfEven)
        .as_bigint_and_exponent();
    let mantissa = mantissa.to_i128().ok_or(NumericError::DecimalRange)?;
    let places = u32::try_from(places).map_err(|_| NumericError::DecimalRange)?;
    Decimal::try_from_i128_with_scale(mantissa, places).map_err(|_| NumericError::DecimalRange)
}

/// Widens a `rust_decimal::Decimal` without loss
pub fn from_rust_decimal(value: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}
