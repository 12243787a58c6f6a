// ============================================================================
// Sezimal Value
// General signed fixed-point base-6 number
// ============================================================================

use super::config::{self, PrecisionContext};
use super::integer::{gcd_magnitude, SezimalInteger};
use super::value::SezimalInput;
use crate::engine::{self, Digits, Magnitude, Sign};
use crate::numeral;
use crate::numeric::{NumericError, NumericResult};
use bigdecimal::BigDecimal;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

/// Immutable signed sezimal number with an exact digit representation.
///
/// The digits are the source of truth for every base-6 operation. An
/// arbitrary-precision decimal equivalent is computed on first use and
/// cached; it serves comparisons against `BigDecimal` and the
/// transcendental bridge.
///
/// Equality and ordering are numeric: `1.0 == 1`, and the precision of a
/// value (its count of fractional digits) is visible only through
/// [`Sezimal::precision`] and the text form.
#[derive(Clone)]
pub struct Sezimal {
    sign: Sign,
    magnitude: Magnitude,
    decimal: OnceLock<BigDecimal>,
}

impl Sezimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a value from any supported input form.
    ///
    /// Ratio input (`"1/3"`, or [`SezimalInput::Ratio`]) yields the
    /// rational's approximate value.
    ///
    /// # Errors
    /// `Validation` for malformed text, `DivisionByZero` for a ratio with a
    /// zero denominator.
    pub fn new(input: impl Into<SezimalInput>) -> NumericResult<Self> {
        input.into().into_sezimal()
    }

    pub fn zero() -> Self {
        Self::from_parts(Sign::Positive, Magnitude::zero())
    }

    pub fn one() -> Self {
        Self::from_parts(Sign::Positive, Magnitude::one())
    }

    /// Assembles a value from engine parts; a zero magnitude is always positive.
    pub(crate) fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Self {
            sign,
            magnitude,
            decimal: OnceLock::new(),
        }
    }

    /// Converts a decimal using the process-wide precision context.
    pub fn from_decimal(value: BigDecimal) -> Self {
        Self::from_decimal_with(value, config::current())
    }

    /// Converts a decimal, rounding the sezimal fraction to `ctx.max_precision`.
    /// The integer part is exact at any size. The input decimal is kept as
    /// the cached decimal equivalent.
    pub fn from_decimal_with(value: BigDecimal, ctx: &PrecisionContext) -> Self {
        let (sign, magnitude) = numeral::from_decimal(&value, ctx);
        Self {
            sign,
            magnitude,
            decimal: OnceLock::from(value),
        }
    }

    /// Reads a dozenal (base 12) numeral.
    pub fn from_dozenal(text: &str) -> NumericResult<Self> {
        let (sign, magnitude) = numeral::from_dozenal(text)?;
        Ok(Self::from_parts(sign, magnitude))
    }

    /// Reads a niftimal (base 36) numeral.
    pub fn from_niftimal(text: &str) -> NumericResult<Self> {
        let (sign, magnitude) = numeral::from_niftimal(text)?;
        Ok(Self::from_parts(sign, magnitude))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Number of fractional digits, trailing zeros included
    #[inline]
    pub fn precision(&self) -> usize {
        self.magnitude.precision()
    }

    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        self.magnitude.integer()
    }

    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        self.magnitude.fraction()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Strictly greater than zero
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.sign.is_negative() && !self.is_zero()
    }

    /// Whether the value equals its own truncation to zero fractional digits
    #[inline]
    pub fn is_integer(&self) -> bool {
        !self.magnitude.has_fraction()
    }

    /// Cached decimal equivalent under the process-wide context.
    ///
    /// Exact when the sezimal fraction terminates in decimal, otherwise
    /// close enough that [`Sezimal::from_decimal`] restores this value.
    pub fn decimal(&self) -> &BigDecimal {
        self.decimal
            .get_or_init(|| numeral::to_decimal(self.sign, &self.magnitude, config::current()))
    }

    /// Decimal equivalent resolved for `ctx`, computed afresh.
    pub fn decimal_with(&self, ctx: &PrecisionContext) -> BigDecimal {
        numeral::to_decimal(self.sign, &self.magnitude, ctx)
    }

    /// The decimal equivalent narrowed to a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `DecimalRange` if the integer part needs more than 28 digits.
    pub fn to_rust_decimal(&self) -> NumericResult<Decimal> {
        numeral::to_rust_decimal(self.decimal())
    }

    /// Dozenal (base 12) text of this value
    pub fn to_dozenal(&self) -> String {
        numeral::to_dozenal(self.sign, &self.magnitude)
    }

    /// Niftimal (base 36) text of this value
    pub fn to_niftimal(&self) -> String {
        numeral::to_niftimal(self.sign, &self.magnitude)
    }

    /// Truncated integer part as a native integer.
    ///
    /// # Errors
    /// `Overflow` if it does not fit in an `i64`.
    pub fn to_native(&self) -> NumericResult<i64> {
        let unsigned = self.magnitude.to_u128().ok_or(NumericError::Overflow)?;
        let signed = i128::try_from(unsigned).map_err(|_| NumericError::Overflow)?;
        let signed = if self.is_negative() { -signed } else { signed };
        i64::try_from(signed).map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Sign and Rounding
    // ========================================================================

    pub fn abs(&self) -> Self {
        Self::from_parts(Sign::Positive, self.magnitude.clone())
    }

    /// `-1`, `0` or `1`
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.sign, Magnitude::one())
        }
    }

    /// Rounds to `precision` fractional digits (see [`engine::round`]).
    pub fn round(&self, precision: usize) -> Self {
        Self::from_parts(self.sign, engine::round(&self.magnitude, precision))
    }

    /// Cuts to `precision` fractional digits without adjustment.
    pub fn trunc(&self, precision: usize) -> Self {
        Self::from_parts(self.sign, engine::truncate(&self.magnitude, precision))
    }

    /// Integer part, truncated toward zero
    pub fn integral(&self) -> Self {
        self.trunc(0)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub(crate) fn plus(&self, rhs: &Self) -> Self {
        let (sign, magnitude) =
            engine::signed_add(self.sign, &self.magnitude, rhs.sign, &rhs.magnitude);
        Self::from_parts(sign, magnitude)
    }

    pub(crate) fn minus(&self, rhs: &Self) -> Self {
        let (sign, magnitude) =
            engine::signed_subtract(self.sign, &self.magnitude, rhs.sign, &rhs.magnitude);
        Self::from_parts(sign, magnitude)
    }

    pub(crate) fn negated(&self) -> Self {
        Self::from_parts(self.sign.negate(), self.magnitude.clone())
    }

    /// Product finalized under an explicit context.
    pub fn mul_with(&self, rhs: &Self, ctx: &PrecisionContext) -> Self {
        let product = engine::multiply(&self.magnitude, &rhs.magnitude);
        Self::from_parts(
            self.sign.combine(rhs.sign),
            engine::finalize(&product, ctx),
        )
    }

    /// `self / rhs` under the process-wide context.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_div_with(rhs, config::current())
    }

    /// `self × (1 / rhs)`, finalized under `ctx`.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div_with(&self, rhs: &Self, ctx: &PrecisionContext) -> NumericResult<Self> {
        let quotient = engine::divide(&self.magnitude, &rhs.magnitude, ctx)?;
        Ok(Self::from_parts(self.sign.combine(rhs.sign), quotient))
    }

    /// `1 / self` under the process-wide context.
    pub fn reciprocal(&self) -> NumericResult<Self> {
        self.reciprocal_with(config::current())
    }

    pub fn reciprocal_with(&self, ctx: &PrecisionContext) -> NumericResult<Self> {
        Self::one().checked_div_with(self, ctx)
    }

    /// Floor quotient and remainder of the truncated integer parts.
    ///
    /// Satisfies `trunc(self) == trunc(rhs) × q + r`, with `r` zero or
    /// carrying the sign of `rhs`.
    ///
    /// # Errors
    /// `DivisionByZero` if the integer part of `rhs` is zero.
    pub fn checked_divmod(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let divisor = rhs.magnitude.integral();
        let (quotient, remainder) = engine::divide_integral(&self.magnitude, &rhs.magnitude)?;

        if self.sign == rhs.sign {
            return Ok((
                Self::from_parts(Sign::Positive, quotient),
                Self::from_parts(rhs.sign, remainder),
            ));
        }

        if remainder.is_zero() {
            return Ok((Self::from_parts(Sign::Negative, quotient), Self::zero()));
        }

        // Signs differ: step the quotient down and take the complement
        let quotient = engine::add(&quotient, &Magnitude::one());
        let (complement, _) = engine::subtract(&divisor, &remainder);
        Ok((
            Self::from_parts(Sign::Negative, quotient),
            Self::from_parts(rhs.sign, complement),
        ))
    }

    pub fn checked_floor_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_divmod(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_divmod(rhs).map(|(_, remainder)| remainder)
    }

    /// Lowest-terms integer pair whose quotient is exactly this value.
    ///
    /// The numerator carries the sign; the denominator is a power of ten₆
    /// reduced by the common divisor.
    pub fn as_integer_ratio(&self) -> (SezimalInteger, SezimalInteger) {
        if self.is_integer() {
            return (
                SezimalInteger::from_magnitude(self.sign, self.magnitude.integral()),
                SezimalInteger::one(),
            );
        }

        let numerator = self.magnitude.scaled_to_integer();
        let denominator = power_of_radix(self.precision());
        let divisor = gcd_magnitude(&numerator, &denominator);

        let reduce = |value: &Magnitude| match engine::divide_integral(value, &divisor) {
            Ok((quotient, _)) => quotient,
            Err(error) => unreachable!("gcd with a power of ten is never zero: {error}"),
        };
        (
            SezimalInteger::from_magnitude(self.sign, reduce(&numerator)),
            SezimalInteger::from_magnitude(Sign::Positive, reduce(&denominator)),
        )
    }
}

/// `10₆^exponent` as an integral magnitude
pub(crate) fn power_of_radix(exponent: usize) -> Magnitude {
    let digits: Digits = std::iter::once(1)
        .chain(std::iter::repeat(0).take(exponent))
        .collect();
    Magnitude::new(digits, std::iter::empty())
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Sezimal {
    type Err = NumericError;

    /// Parses a canonical numeral or a ratio literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SezimalInput::Numeral(s.to_string()).into_sezimal()
    }
}

impl From<i64> for Sezimal {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        Self::from_parts(sign, Magnitude::from_u128(u128::from(value.unsigned_abs())))
    }
}

impl From<u64> for Sezimal {
    fn from(value: u64) -> Self {
        Self::from_parts(Sign::Positive, Magnitude::from_u128(u128::from(value)))
    }
}

impl From<i32> for Sezimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<BigDecimal> for Sezimal {
    fn from(value: BigDecimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Decimal> for Sezimal {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(numeral::from_rust_decimal(value))
    }
}

impl Default for Sezimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Sezimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Sezimal {}

impl PartialOrd for Sezimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sezimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp_value(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp_value(&self.magnitude),
        }
    }
}

impl Hash for Sezimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing fractional zeros do not affect equality
        self.sign.hash(state);
        self.magnitude.trimmed().hash(state);
    }
}

impl PartialEq<BigDecimal> for Sezimal {
    fn eq(&self, other: &BigDecimal) -> bool {
        self.decimal() == other
    }
}

impl PartialOrd<BigDecimal> for Sezimal {
    fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
        self.decimal().partial_cmp(other)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Sezimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl fmt::Debug for Sezimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sezimal(\"{self}\")")
    }
}

super::text_serde!(Sezimal);
