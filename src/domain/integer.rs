// ============================================================================
// Sezimal Integer
// Integer-constrained view over the general value
// ============================================================================

use super::sezimal::Sezimal;
use super::value::SezimalInput;
use crate::engine::{self, Magnitude, Sign};
use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A sezimal value with no fractional digits.
///
/// Wraps a [`Sezimal`] and dereferences to it, so every read-only query and
/// general operation is available; integer-closed operations (`+`, `-`,
/// `×`, floor division, remainder, powers) return integers again.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SezimalInteger(Sezimal);

impl SezimalInteger {
    /// Builds an integer from any supported input form.
    ///
    /// Fractional digits are accepted only when they are all zero; they are
    /// dropped.
    ///
    /// # Errors
    /// `InvalidInteger` for non-zero fractional digits, plus any error the
    /// input itself produces.
    pub fn new(input: impl Into<SezimalInput>) -> NumericResult<Self> {
        input.into().into_integer()
    }

    pub(crate) fn from_magnitude(sign: Sign, magnitude: Magnitude) -> Self {
        debug_assert!(!magnitude.has_fraction());
        Self(Sezimal::from_parts(sign, magnitude.integral()))
    }

    pub fn zero() -> Self {
        Self(Sezimal::zero())
    }

    pub fn one() -> Self {
        Self(Sezimal::one())
    }

    #[inline]
    pub fn as_sezimal(&self) -> &Sezimal {
        &self.0
    }

    #[inline]
    pub fn into_sezimal(self) -> Sezimal {
        self.0
    }

    /// The digits read as a base-6 number, for use as an array index.
    ///
    /// # Errors
    /// `Overflow` for negative values or values beyond `usize`.
    pub fn to_index(&self) -> NumericResult<usize> {
        if self.is_negative() {
            return Err(NumericError::Overflow);
        }
        let value = self.magnitude().to_u128().ok_or(NumericError::Overflow)?;
        usize::try_from(value).map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Integer Arithmetic
    // ========================================================================

    /// Floor quotient and remainder; the remainder takes the divisor's sign.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_divmod(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let (quotient, remainder) = self.0.checked_divmod(&rhs.0)?;
        Ok((Self(quotient), Self(remainder)))
    }

    pub fn checked_floor_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_divmod(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_divmod(rhs).map(|(_, remainder)| remainder)
    }

    /// `self` raised to `exponent`, exactly, by repeated squaring.
    pub fn pow(&self, exponent: u64) -> Self {
        let result = engine::power(self.magnitude(), exponent);
        let sign = if self.is_negative() && exponent % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_magnitude(sign, result)
    }

    /// Greatest common divisor, always non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_magnitude(
            Sign::Positive,
            gcd_magnitude(self.magnitude(), other.magnitude()),
        )
    }

    /// `n!` computed iteratively.
    ///
    /// # Errors
    /// `Domain` for negative values.
    pub fn factorial(&self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::domain(format!("factorial of negative value {self}")));
        }

        let limit = self.magnitude();
        let mut product = Magnitude::one();
        let mut factor = Magnitude::digit(2);
        while factor.cmp_value(limit) != std::cmp::Ordering::Greater {
            product = engine::multiply(&product, &factor);
            factor = engine::add(&factor, &Magnitude::one());
        }
        Ok(Self::from_magnitude(Sign::Positive, product))
    }
}

/// Euclid's algorithm on integral magnitudes, iteratively.
pub(crate) fn gcd_magnitude(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let mut a = a.integral();
    let mut b = b.integral();
    while !b.is_zero() {
        let remainder = match engine::divide_integral(&a, &b) {
            Ok((_, remainder)) => remainder,
            Err(_) => break,
        };
        a = std::mem::replace(&mut b, remainder);
    }
    a
}

impl Deref for SezimalInteger {
    type Target = Sezimal;

    fn deref(&self) -> &Sezimal {
        &self.0
    }
}

impl AsRef<Sezimal> for SezimalInteger {
    fn as_ref(&self) -> &Sezimal {
        &self.0
    }
}

impl TryFrom<Sezimal> for SezimalInteger {
    type Error = NumericError;

    fn try_from(value: Sezimal) -> Result<Self, Self::Error> {
        if !value.is_integer() {
            return Err(NumericError::InvalidInteger(value.to_string()));
        }
        if value.precision() == 0 {
            return Ok(Self(value));
        }
        Ok(Self::from_magnitude(value.sign(), value.magnitude().integral()))
    }
}

impl From<SezimalInteger> for Sezimal {
    fn from(value: SezimalInteger) -> Self {
        value.0
    }
}

impl From<i64> for SezimalInteger {
    fn from(value: i64) -> Self {
        Self(Sezimal::from(value))
    }
}

impl From<u64> for SezimalInteger {
    fn from(value: u64) -> Self {
        Self(Sezimal::from(value))
    }
}

impl From<i32> for SezimalInteger {
    fn from(value: i32) -> Self {
        Self(Sezimal::from(value))
    }
}

impl FromStr for SezimalInteger {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<Sezimal>()?)
    }
}

impl PartialEq<Sezimal> for SezimalInteger {
    fn eq(&self, other: &Sezimal) -> bool {
        self.0 == *other
    }
}

impl PartialEq<SezimalInteger> for Sezimal {
    fn eq(&self, other: &SezimalInteger) -> bool {
        *self == other.0
    }
}

impl PartialOrd<Sezimal> for SezimalInteger {
    fn partial_cmp(&self, other: &Sezimal) -> Option<std::cmp::Ordering> {
        Some(self.0.cmp(other))
    }
}

impl fmt::Display for SezimalInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for SezimalInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SezimalInteger(\"{}\")", self.0)
    }
}

super::text_serde!(SezimalInteger);
