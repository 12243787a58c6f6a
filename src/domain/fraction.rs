// ============================================================================
// Sezimal Fraction
// Exact numerator/denominator pair with a cached approximation
// ============================================================================

use super::config::{self, PrecisionContext};
use super::integer::SezimalInteger;
use super::sezimal::Sezimal;
use super::value::{SezimalInput, SezimalValue};
use crate::numeral::{decimal, normalizer};
use crate::numeric::{NumericError, NumericResult};
use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

/// Exact rational number.
///
/// Reduction to lowest terms happens only when the fraction is built from a
/// single value or ratio literal. Explicit pairs and the results of
/// fraction arithmetic keep their terms as produced; call
/// [`SezimalFraction::reduced`] to normalize them.
///
/// Comparison, hashing and display of the numeric value go through the
/// approximate quotient computed once at construction. The construction
/// context is kept and carried into the reciprocal and every fraction
/// derived from this one.
#[derive(Clone)]
pub struct SezimalFraction {
    numerator: SezimalInteger,
    denominator: SezimalInteger,
    approx: Sezimal,
    context: PrecisionContext,
    reciprocal: OnceLock<Box<SezimalFraction>>,
}

impl SezimalFraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a fraction from any supported input form.
    pub fn new(input: impl Into<SezimalInput>) -> NumericResult<Self> {
        input.into().into_fraction()
    }

    /// Stores `numerator / denominator` exactly as given.
    ///
    /// # Errors
    /// `DivisionByZero` if the denominator is zero.
    pub fn from_pair(numerator: SezimalInteger, denominator: SezimalInteger) -> NumericResult<Self> {
        Self::from_pair_with(numerator, denominator, config::current())
    }

    pub fn from_pair_with(
        numerator: SezimalInteger,
        denominator: SezimalInteger,
        ctx: &PrecisionContext,
    ) -> NumericResult<Self> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::assemble(numerator, denominator, ctx))
    }

    /// Lowest-terms fraction equal to `value`.
    pub fn from_value_with(value: &Sezimal, ctx: &PrecisionContext) -> Self {
        let (numerator, denominator) = value.as_integer_ratio();
        Self::assemble(numerator, denominator, ctx)
    }

    /// Fraction of two general values. Integer terms are kept as given;
    /// fractional terms are cleared exactly through their integer ratios.
    pub(crate) fn from_values_with(
        numerator: &Sezimal,
        denominator: &Sezimal,
        ctx: &PrecisionContext,
    ) -> NumericResult<Self> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if numerator.is_integer() && denominator.is_integer() {
            return Ok(Self::assemble(
                SezimalInteger::try_from(numerator.clone())?,
                SezimalInteger::try_from(denominator.clone())?,
                ctx,
            ));
        }

        // (p/q) / (r/s) = (p·s) / (q·r)
        let (p, q) = numerator.as_integer_ratio();
        let (r, s) = denominator.as_integer_ratio();
        Ok(Self::assemble(&p * &s, &q * &r, ctx))
    }

    /// Parses a ratio literal (reduced to lowest terms) or a single numeral.
    pub(crate) fn parse_with(text: &str, ctx: &PrecisionContext) -> NumericResult<Self> {
        let Some((numerator, denominator)) = normalizer::split_ratio(text) else {
            let value = SezimalInput::Numeral(text.to_string()).into_sezimal_with(ctx)?;
            return Ok(Self::from_value_with(&value, ctx));
        };

        let numerator = parse_term(numerator)?;
        let denominator = parse_term(denominator)?;
        Ok(Self::from_values_with(&numerator, &denominator, ctx)?.reduced_with(ctx))
    }

    /// Callers check the denominator for zero first.
    fn assemble(numerator: SezimalInteger, denominator: SezimalInteger, ctx: &PrecisionContext) -> Self {
        let approx = approximate(&numerator, &denominator, ctx);
        Self {
            numerator,
            denominator,
            approx,
            context: *ctx,
            reciprocal: OnceLock::new(),
        }
    }

    /// Fraction in this one's context
    fn derive(&self, numerator: SezimalInteger, denominator: SezimalInteger) -> Self {
        Self::assemble(numerator, denominator, &self.context)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &SezimalInteger {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &SezimalInteger {
        &self.denominator
    }

    /// Approximate quotient, bounded to the context's maximum precision
    #[inline]
    pub fn approx(&self) -> &Sezimal {
        &self.approx
    }

    pub fn into_approx(self) -> Sezimal {
        self.approx
    }

    /// Context the fraction was built under
    #[inline]
    pub fn context(&self) -> &PrecisionContext {
        &self.context
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    /// Whether numerator and denominator share no common factor
    pub fn is_reduced(&self) -> bool {
        self.numerator.gcd(&self.denominator).magnitude().is_one()
    }

    pub fn as_integer_ratio(&self) -> (SezimalInteger, SezimalInteger) {
        (self.numerator.clone(), self.denominator.clone())
    }

    /// Numerator and denominator as exact decimal integers
    pub fn as_decimal_integer_ratio(&self) -> (BigDecimal, BigDecimal) {
        (self.numerator.decimal().clone(), self.denominator.decimal().clone())
    }

    /// `denominator / numerator` in the construction context, computed once
    /// and cached.
    ///
    /// # Errors
    /// `DivisionByZero` if the numerator is zero.
    pub fn reciprocal(&self) -> NumericResult<&SezimalFraction> {
        if self.numerator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.reciprocal.get_or_init(|| {
            Box::new(self.derive(self.denominator.clone(), self.numerator.clone()))
        }))
    }

    /// `denominator / numerator` approximated under `ctx`. Not cached.
    ///
    /// # Errors
    /// `DivisionByZero` if the numerator is zero.
    pub fn reciprocal_with(&self, ctx: &PrecisionContext) -> NumericResult<Self> {
        if self.numerator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::assemble(self.denominator.clone(), self.numerator.clone(), ctx))
    }

    /// The same value in lowest terms, with the sign on the numerator.
    pub fn reduced(&self) -> Self {
        self.reduced_with(&self.context)
    }

    fn reduced_with(&self, ctx: &PrecisionContext) -> Self {
        let divisor = self.numerator.gcd(&self.denominator);
        if divisor.magnitude().is_one() && !self.denominator.is_negative() {
            return self.clone();
        }

        let sign_fix = |term: &SezimalInteger| {
            if self.denominator.is_negative() {
                -term
            } else {
                term.clone()
            }
        };
        // The denominator is non-zero, so the gcd is too
        let reduce = |term: &SezimalInteger| match term.checked_floor_div(&divisor) {
            Ok(quotient) => quotient,
            Err(error) => unreachable!("gcd with a non-zero denominator is non-zero: {error}"),
        };
        Self::assemble(
            sign_fix(&reduce(&self.numerator)),
            sign_fix(&reduce(&self.denominator)),
            ctx,
        )
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Cross-multiplied product; the terms are not reduced.
    pub fn mul_fraction(&self, rhs: &Self) -> Self {
        self.derive(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    /// Product with an integer folded into the numerator.
    pub fn mul_integer(&self, rhs: &SezimalInteger) -> Self {
        self.derive(&self.numerator * rhs, self.denominator.clone())
    }

    /// Product with a general value: exact when the value is integral,
    /// otherwise the approximation times the value.
    pub fn mul_value(&self, rhs: &Sezimal) -> SezimalValue {
        match SezimalInteger::try_from(rhs.clone()) {
            Ok(integer) => SezimalValue::Fraction(self.mul_integer(&integer)),
            Err(_) => SezimalValue::Real(&self.approx * rhs),
        }
    }

    /// Cross-multiplied quotient; the terms are not reduced.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div_fraction(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.derive(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Quotient with an integer folded into the denominator.
    pub fn checked_div_integer(&self, rhs: &SezimalInteger) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.derive(self.numerator.clone(), &self.denominator * rhs))
    }

    /// Quotient by a general value: exact when the value is integral.
    pub fn checked_div_value(&self, rhs: &Sezimal) -> NumericResult<SezimalValue> {
        match SezimalInteger::try_from(rhs.clone()) {
            Ok(integer) => self.checked_div_integer(&integer).map(SezimalValue::Fraction),
            Err(_) => self
                .approx
                .checked_div_with(rhs, &self.context)
                .map(SezimalValue::Real),
        }
    }

    /// `self` raised to an integer power, term by term. A negative exponent
    /// swaps numerator and denominator.
    ///
    /// # Errors
    /// `Domain` for a zero fraction raised to a negative power.
    pub fn powi(&self, exponent: i64) -> NumericResult<Self> {
        let magnitude = exponent.unsigned_abs();
        let numerator = self.numerator.pow(magnitude);
        let denominator = self.denominator.pow(magnitude);
        if exponent >= 0 {
            return Ok(self.derive(numerator, denominator));
        }
        if numerator.is_zero() {
            return Err(NumericError::domain("zero raised to a negative power"));
        }
        Ok(self.derive(denominator, numerator))
    }
}

fn parse_term(text: &str) -> NumericResult<Sezimal> {
    let parsed = normalizer::parse_numeral(text)?;
    Ok(Sezimal::from_parts(parsed.sign, parsed.magnitude))
}

/// Quotient computed in the decimal domain at the context's precision.
/// Both terms are integers, so their decimals are exact at any size.
fn approximate(
    numerator: &SezimalInteger,
    denominator: &SezimalInteger,
    ctx: &PrecisionContext,
) -> Sezimal {
    let (sign, magnitude) = decimal::quotient(numerator.decimal(), denominator.decimal(), ctx);
    Sezimal::from_parts(sign, magnitude)
}

impl FromStr for SezimalFraction {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, config::current())
    }
}

impl From<SezimalInteger> for SezimalFraction {
    fn from(value: SezimalInteger) -> Self {
        Self::assemble(value, SezimalInteger::one(), config::current())
    }
}

impl From<&Sezimal> for SezimalFraction {
    fn from(value: &Sezimal) -> Self {
        Self::from_value_with(value, config::current())
    }
}

impl From<SezimalFraction> for Sezimal {
    fn from(value: SezimalFraction) -> Self {
        value.approx
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for SezimalFraction {
    fn eq(&self, other: &Self) -> bool {
        self.approx == other.approx
    }
}

impl Eq for SezimalFraction {}

impl PartialOrd for SezimalFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SezimalFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.approx.cmp(&other.approx)
    }
}

impl Hash for SezimalFraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.approx.hash(state);
    }
}

impl PartialEq<Sezimal> for SezimalFraction {
    fn eq(&self, other: &Sezimal) -> bool {
        self.approx == *other
    }
}

impl PartialEq<SezimalFraction> for Sezimal {
    fn eq(&self, other: &SezimalFraction) -> bool {
        *self == other.approx
    }
}

impl PartialOrd<Sezimal> for SezimalFraction {
    fn partial_cmp(&self, other: &Sezimal) -> Option<Ordering> {
        Some(self.approx.cmp(other))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for SezimalFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for SezimalFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SezimalFraction(\"{self}\" ≈ {})", self.approx)
    }
}

super::text_serde!(SezimalFraction);
