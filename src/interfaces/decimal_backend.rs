// ============================================================================
// Decimal Backend Interface
// Defines the contract for transcendental math on decimal values
// ============================================================================

use crate::numeral::decimal::{div_scaled, from_rust_decimal, to_rust_decimal};
use crate::numeric::{NumericError, NumericResult};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::{Decimal, MathematicalOps};

/// Extra decimal places carried through intermediate steps
const GUARD_PLACES: i64 = 10;

/// Largest `|x|` accepted by `exp`; `e^x` then has about 4343 integer digits
const EXP_LIMIT: i64 = 10_000;

/// Transcendental operations evaluated in the decimal domain.
///
/// Sezimal values are bridged to `BigDecimal`, evaluated here and converted
/// back. `scale` is the number of decimal places the caller needs; a
/// backend may deliver fewer when its number type is bounded.
/// Implementations must reject arguments outside the function's domain
/// with `NumericError::Domain` rather than panic.
pub trait DecimalBackend: Send + Sync {
    /// Short identifier used in log output
    fn name(&self) -> &'static str;

    /// Natural logarithm of a positive value
    fn ln(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal>;

    /// `e` raised to `value`
    fn exp(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal>;

    /// `base` raised to a (possibly fractional) `exponent`
    fn pow(&self, base: &BigDecimal, exponent: &BigDecimal, scale: i64) -> NumericResult<BigDecimal>;

    /// Logarithm of `value` in an arbitrary positive `base`
    fn log(&self, value: &BigDecimal, base: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        let working = scale + GUARD_PLACES;
        let denominator = self.ln(base, working)?;
        if denominator.is_zero() {
            return Err(NumericError::domain("logarithm base cannot be one"));
        }
        Ok(div_scaled(&self.ln(value, working)?, &denominator, scale))
    }
}

fn at_scale(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfEven)
}

/// Decimal digits left of the point, zero for values below one
fn integer_digits(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    (value.digits() as i64 - scale).max(0)
}

// ============================================================================
// BigDecimal Backend
// ============================================================================

/// Series evaluation on `BigDecimal`, accurate to any requested scale.
///
/// `ln` reduces its argument to `[1, 2)` by powers of two and sums the
/// `atanh` series; `exp` halves its argument below one half, sums the
/// Taylor series and squares back. Fractional powers go through
/// `exp(y · ln x)` with the working scale widened by the size of the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigDecimalBackend;

impl BigDecimalBackend {
    /// `atanh(y) = y + y³/3 + y⁵/5 + …` for `|y| < 1/3`
    fn atanh_series(y: &BigDecimal, scale: i64) -> BigDecimal {
        let square = at_scale(&(y * y), scale);
        let mut power = y.clone();
        let mut sum = BigDecimal::zero();
        let mut n: u64 = 1;
        loop {
            let term = div_scaled(&power, &BigDecimal::from(n), scale);
            if term.is_zero() {
                break;
            }
            sum += term;
            power = at_scale(&(&power * &square), scale);
            n += 2;
        }
        sum
    }

    fn ln_positive(value: &BigDecimal, scale: i64) -> BigDecimal {
        let one = BigDecimal::one();
        let two = BigDecimal::from(2);
        let half = BigDecimal::new(BigInt::from(5), 1);

        // value = m · 2^k with 1 <= m < 2
        let reduction_scale = scale + 2 * GUARD_PLACES;
        let mut m = value.clone();
        let mut k: i64 = 0;
        while m >= two {
            m = at_scale(&(&m * &half), reduction_scale);
            k += 1;
        }
        while m < one {
            m = &m * &two;
            k -= 1;
        }

        let working = scale + GUARD_PLACES + integer_digits(&BigDecimal::from(k.abs()));
        let y = div_scaled(&(&m - &one), &(&m + &one), working);
        let mut sum = Self::atanh_series(&y, working) * &two;
        if k != 0 {
            // ln 2 = 2 · atanh(1/3)
            let third = div_scaled(&one, &BigDecimal::from(3), working);
            let ln_2 = Self::atanh_series(&third, working) * &two;
            sum += ln_2 * BigDecimal::from(k);
        }
        at_scale(&sum, scale)
    }

    fn exp_bounded(value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        if value.abs() > BigDecimal::from(EXP_LIMIT) {
            return if value.is_negative() {
                Ok(BigDecimal::zero())
            } else {
                Err(NumericError::Overflow)
            };
        }
        if value.is_negative() {
            // e^-x = 1 / e^x, and e^x >= 1 keeps the quotient's error below the divisor's
            let positive = Self::exp_bounded(&value.abs(), scale + GUARD_PLACES)?;
            return Ok(div_scaled(&BigDecimal::one(), &positive, scale));
        }

        // e^x = (e^(x / 2^k))^(2^k) with x / 2^k < 1/2
        let half = BigDecimal::new(BigInt::from(5), 1);
        let mut reduced = value.clone();
        let mut halvings: i64 = 0;
        while reduced >= half {
            reduced = &reduced * &half;
            halvings += 1;
        }

        // log10(e) < 1/2, and every squaring can double the relative error
        let bound = value
            .with_scale_round(0, RoundingMode::Up)
            .to_i64()
            .ok_or(NumericError::Overflow)?;
        let working = scale + GUARD_PLACES + bound / 2 + 1 + halvings;

        let mut sum = BigDecimal::one();
        let mut term = BigDecimal::one();
        let mut n: u64 = 1;
        loop {
            term = div_scaled(&(&term * &reduced), &BigDecimal::from(n), working);
            if term.is_zero() {
                break;
            }
            sum += term.clone();
            n += 1;
        }

        for _ in 0..halvings {
            sum = at_scale(&(&sum * &sum), working);
        }
        Ok(at_scale(&sum, scale))
    }
}

impl DecimalBackend for BigDecimalBackend {
    fn name(&self) -> &'static str {
        "bigdecimal"
    }

    fn ln(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        if !value.is_positive() {
            return Err(NumericError::domain(format!(
                "logarithm of non-positive value {value}"
            )));
        }
        Ok(Self::ln_positive(value, scale))
    }

    fn exp(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        Self::exp_bounded(value, scale)
    }

    fn pow(&self, base: &BigDecimal, exponent: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        if base.is_zero() {
            return if exponent.is_negative() {
                Err(NumericError::domain("zero raised to a negative power"))
            } else if exponent.is_zero() {
                Ok(BigDecimal::one())
            } else {
                Ok(BigDecimal::zero())
            };
        }

        let odd_power = if exponent.is_integer() {
            let (integer, _) = exponent.with_scale(0).into_bigint_and_exponent();
            !(integer % 2u32).is_zero()
        } else if base.is_negative() {
            return Err(NumericError::domain(format!(
                "negative base {base} raised to fractional power {exponent}"
            )));
        } else {
            false
        };

        // A coarse estimate of y · ln|x| sizes the working scale
        let magnitude = base.abs();
        let estimate = exponent * &Self::ln_positive(&magnitude, 4);
        let bound = estimate
            .abs()
            .with_scale_round(0, RoundingMode::Up)
            .to_i64()
            .filter(|&bound| bound <= EXP_LIMIT + 1);
        let Some(bound) = bound else {
            return if estimate.is_negative() {
                Ok(BigDecimal::zero())
            } else {
                Err(NumericError::Overflow)
            };
        };

        let working = scale + GUARD_PLACES + bound / 2 + 1 + integer_digits(exponent);
        let logarithm = Self::ln_positive(&magnitude, working);
        let result = Self::exp_bounded(&(exponent * &logarithm), scale)?;
        Ok(if base.is_negative() && odd_power {
            -result
        } else {
            result
        })
    }
}

// ============================================================================
// rust_decimal Backend
// ============================================================================

/// Backend built on the `maths` feature of `rust_decimal`.
///
/// Operands are narrowed to 28 significant digits and results carry at
/// most 28 digits whatever `scale` asks for.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustDecimalBackend;

impl DecimalBackend for RustDecimalBackend {
    fn name(&self) -> &'static str {
        "rust_decimal"
    }

    fn ln(&self, value: &BigDecimal, _scale: i64) -> NumericResult<BigDecimal> {
        let value = to_rust_decimal(value)?;
        if value <= Decimal::ZERO {
            return Err(NumericError::domain(format!(
                "logarithm of non-positive value {value}"
            )));
        }
        value
            .checked_ln()
            .map(from_rust_decimal)
            .ok_or(NumericError::Overflow)
    }

    fn exp(&self, value: &BigDecimal, _scale: i64) -> NumericResult<BigDecimal> {
        to_rust_decimal(value)?
            .checked_exp()
            .map(from_rust_decimal)
            .ok_or(NumericError::Overflow)
    }

    fn pow(&self, base: &BigDecimal, exponent: &BigDecimal, _scale: i64) -> NumericResult<BigDecimal> {
        let base = to_rust_decimal(base)?;
        let exponent = to_rust_decimal(exponent)?;
        if base.is_zero() {
            return if exponent.is_sign_negative() {
                Err(NumericError::domain("zero raised to a negative power"))
            } else if exponent.is_zero() {
                Ok(BigDecimal::one())
            } else {
                Ok(BigDecimal::zero())
            };
        }
        if base.is_sign_negative() && !exponent.fract().is_zero() {
            return Err(NumericError::domain(format!(
                "negative base {base} raised to fractional power {exponent}"
            )));
        }
        base.checked_powd(exponent)
            .map(from_rust_decimal)
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Logging Decorator
// ============================================================================

/// Backend decorator that traces every call and its outcome
#[derive(Debug, Clone, Default)]
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: DecimalBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: DecimalBackend> DecimalBackend for LoggingBackend<B> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn ln(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        let result = self.inner.ln(value, scale);
        tracing::debug!(backend = self.name(), %value, scale, ?result, "ln");
        result
    }

    fn exp(&self, value: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        let result = self.inner.exp(value, scale);
        tracing::debug!(backend = self.name(), %value, scale, ?result, "exp");
        result
    }

    fn pow(&self, base: &BigDecimal, exponent: &BigDecimal, scale: i64) -> NumericResult<BigDecimal> {
        let result = self.inner.pow(base, exponent, scale);
        tracing::debug!(backend = self.name(), %base, %exponent, scale, ?result, "pow");
        result
    }
}
