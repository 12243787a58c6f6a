// ============================================================================
// Value Inputs and Results
// Closed set of construction sources and the union of the three value types
// ============================================================================

use super::config::{self, PrecisionContext};
use super::fraction::SezimalFraction;
use super::integer::SezimalInteger;
use super::sezimal::Sezimal;
use crate::numeral::{self, normalizer};
use crate::numeric::NumericResult;
use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use std::fmt;

/// Every form a sezimal value can be built from.
///
/// Construction dispatches on the variant; each target type then applies
/// its own invariant (integers reject fractional digits, fractions reduce
/// single-value input).
#[derive(Debug, Clone)]
pub enum SezimalInput {
    /// Canonical numeral or ratio literal, e.g. `"-12.3"`, `"1e-3"`, `"1/3"`
    Numeral(String),
    /// Decimal value, converted through the decimal bridge
    Decimal(BigDecimal),
    /// Native integer
    Native(i64),
    /// Base-12 numeral text
    Dozenal(String),
    /// Base-36 numeral text
    Niftimal(String),
    /// An existing value of any of the three types
    Value(SezimalValue),
    /// Explicit numerator and denominator
    Ratio {
        numerator: Sezimal,
        denominator: Sezimal,
    },
}

impl SezimalInput {
    pub fn dozenal(text: impl Into<String>) -> Self {
        SezimalInput::Dozenal(text.into())
    }

    pub fn niftimal(text: impl Into<String>) -> Self {
        SezimalInput::Niftimal(text.into())
    }

    pub fn ratio(numerator: impl Into<Sezimal>, denominator: impl Into<Sezimal>) -> Self {
        SezimalInput::Ratio {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Resolves the input to a general value under the process-wide context.
    pub fn into_sezimal(self) -> NumericResult<Sezimal> {
        self.into_sezimal_with(config::current())
    }

    /// Resolves the input to a general value. Ratios resolve to the
    /// rational's approximate value.
    pub fn into_sezimal_with(self, ctx: &PrecisionContext) -> NumericResult<Sezimal> {
        match self {
            SezimalInput::Numeral(text) if normalizer::is_ratio(&text) => {
                Ok(SezimalFraction::parse_with(&text, ctx)?.into_approx())
            }
            SezimalInput::Numeral(text) => {
                let parsed = normalizer::parse_numeral(&text)?;
                Ok(Sezimal::from_parts(parsed.sign, parsed.magnitude))
            }
            SezimalInput::Decimal(value) => Ok(Sezimal::from_decimal_with(value, ctx)),
            SezimalInput::Native(value) => Ok(Sezimal::from(value)),
            SezimalInput::Dozenal(text) => Sezimal::from_dozenal(&text),
            SezimalInput::Niftimal(text) => Sezimal::from_niftimal(&text),
            SezimalInput::Value(value) => Ok(value.into_sezimal()),
            SezimalInput::Ratio {
                numerator,
                denominator,
            } => Ok(SezimalFraction::from_values_with(&numerator, &denominator, ctx)?.into_approx()),
        }
    }

    /// Resolves the input to an integer.
    ///
    /// # Errors
    /// `InvalidInteger` if the value has non-zero fractional digits.
    pub fn into_integer(self) -> NumericResult<SezimalInteger> {
        match self {
            SezimalInput::Value(SezimalValue::Integer(value)) => Ok(value),
            other => SezimalInteger::try_from(other.into_sezimal()?),
        }
    }

    /// Resolves the input to a rational.
    ///
    /// Ratio input keeps the given terms; any other input is converted to
    /// its lowest-terms ratio.
    pub fn into_fraction_with(self, ctx: &PrecisionContext) -> NumericResult<SezimalFraction> {
        match self {
            SezimalInput::Numeral(text) => SezimalFraction::parse_with(&text, ctx),
            SezimalInput::Value(SezimalValue::Fraction(value)) => Ok(value),
            SezimalInput::Ratio {
                numerator,
                denominator,
            } => SezimalFraction::from_values_with(&numerator, &denominator, ctx),
            other => Ok(SezimalFraction::from_value_with(&other.into_sezimal_with(ctx)?, ctx)),
        }
    }

    pub fn into_fraction(self) -> NumericResult<SezimalFraction> {
        self.into_fraction_with(config::current())
    }
}

impl From<&str> for SezimalInput {
    fn from(text: &str) -> Self {
        SezimalInput::Numeral(text.to_string())
    }
}

impl From<String> for SezimalInput {
    fn from(text: String) -> Self {
        SezimalInput::Numeral(text)
    }
}

impl From<BigDecimal> for SezimalInput {
    fn from(value: BigDecimal) -> Self {
        SezimalInput::Decimal(value)
    }
}

impl From<rust_decimal::Decimal> for SezimalInput {
    fn from(value: rust_decimal::Decimal) -> Self {
        SezimalInput::Decimal(numeral::from_rust_decimal(value))
    }
}

impl From<i64> for SezimalInput {
    fn from(value: i64) -> Self {
        SezimalInput::Native(value)
    }
}

impl From<i32> for SezimalInput {
    fn from(value: i32) -> Self {
        SezimalInput::Native(i64::from(value))
    }
}

impl From<SezimalValue> for SezimalInput {
    fn from(value: SezimalValue) -> Self {
        SezimalInput::Value(value)
    }
}

impl From<Sezimal> for SezimalInput {
    fn from(value: Sezimal) -> Self {
        SezimalInput::Value(SezimalValue::Real(value))
    }
}

impl From<SezimalInteger> for SezimalInput {
    fn from(value: SezimalInteger) -> Self {
        SezimalInput::Value(SezimalValue::Integer(value))
    }
}

impl From<SezimalFraction> for SezimalInput {
    fn from(value: SezimalFraction) -> Self {
        SezimalInput::Value(SezimalValue::Fraction(value))
    }
}

// ============================================================================
// SezimalValue
// ============================================================================

/// Result of an operation whose type depends on its operands, e.g. a
/// rational times a general value.
#[derive(Debug, Clone)]
pub enum SezimalValue {
    Real(Sezimal),
    Integer(SezimalInteger),
    Fraction(SezimalFraction),
}

impl SezimalValue {
    /// The value as a general number; rationals give their approximation.
    pub fn as_sezimal(&self) -> &Sezimal {
        match self {
            SezimalValue::Real(value) => value,
            SezimalValue::Integer(value) => value.as_sezimal(),
            SezimalValue::Fraction(value) => value.approx(),
        }
    }

    pub fn into_sezimal(self) -> Sezimal {
        match self {
            SezimalValue::Real(value) => value,
            SezimalValue::Integer(value) => value.into_sezimal(),
            SezimalValue::Fraction(value) => value.into_approx(),
        }
    }

    /// Whether the value is held exactly (integer or rational terms)
    pub fn is_exact(&self) -> bool {
        !matches!(self, SezimalValue::Real(_))
    }

    pub fn as_fraction(&self) -> Option<&SezimalFraction> {
        match self {
            SezimalValue::Fraction(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Sezimal> for SezimalValue {
    fn from(value: Sezimal) -> Self {
        SezimalValue::Real(value)
    }
}

impl From<SezimalInteger> for SezimalValue {
    fn from(value: SezimalInteger) -> Self {
        SezimalValue::Integer(value)
    }
}

impl From<SezimalFraction> for SezimalValue {
    fn from(value: SezimalFraction) -> Self {
        SezimalValue::Fraction(value)
    }
}

impl PartialEq for SezimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_sezimal() == other.as_sezimal()
    }
}

impl Eq for SezimalValue {}

impl PartialOrd for SezimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SezimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_sezimal().cmp(other.as_sezimal())
    }
}

impl fmt::Display for SezimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SezimalValue::Real(value) => fmt::Display::fmt(value, f),
            SezimalValue::Integer(value) => fmt::Display::fmt(value, f),
            SezimalValue::Fraction(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use std::str::FromStr;

    #[test]
    fn test_input_dispatch() {
        let expected: Sezimal = "-14.3".parse().unwrap();
        let inputs = [
            SezimalInput::from("-14.3"),
            SezimalInput::from(BigDecimal::from_str("-10.5").unwrap()),
            SezimalInput::from(rust_decimal::Decimal::new(-105, 1)),
            SezimalInput::dozenal("-A.6"),
            SezimalInput::niftimal("-A.I"),
            SezimalInput::from(expected.clone()),
            SezimalInput::ratio(-21i64, 2i64),
        ];
        for input in inputs {
            assert_eq!(input.clone().into_sezimal().unwrap(), expected, "{input:?}");
        }
        assert_eq!(SezimalInput::from(-6i64).into_sezimal().unwrap().to_string(), "-10");
    }

    #[test]
    fn test_input_into_integer() {
        assert_eq!(SezimalInput::from("12.00").into_integer().unwrap().to_string(), "12");
        assert_eq!(
            SezimalInput::from("12.01").into_integer(),
            Err(NumericError::InvalidInteger("12.01".to_string()))
        );
        assert_eq!(SezimalInput::dozenal("10").into_integer().unwrap().to_string(), "20");
    }

    #[test]
    fn test_input_into_fraction() {
        let fraction = SezimalInput::from("4/2").into_fraction().unwrap();
        assert_eq!(fraction.to_string(), "2/1");

        let fraction = SezimalInput::ratio(4i64, 2i64).into_fraction().unwrap();
        assert_eq!(fraction.to_string(), "4/2");

        let fraction = SezimalInput::from("0.3").into_fraction().unwrap();
        assert_eq!(fraction.to_string(), "1/2");

        assert_eq!(
            SezimalInput::ratio(1i64, 0i64).into_fraction(),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_value_views() {
        let fraction = SezimalValue::from(SezimalFraction::from_str("1/2").unwrap());
        assert!(fraction.is_exact());
        assert_eq!(fraction.as_sezimal().to_string(), "0.3");
        assert!(fraction.as_fraction().is_some());
        assert_eq!(fraction.to_string(), "1/2");

        let real = SezimalValue::from(Sezimal::from_str("0.3").unwrap());
        assert!(!real.is_exact());
        assert_eq!(real, fraction);
        assert!(real < SezimalValue::from(SezimalInteger::one()));
    }
}
