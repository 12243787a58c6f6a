// ============================================================================
// Transcendental Operations
// Powers, logarithms, exponential, square root and factorial
// ============================================================================
//
// Integer exponents stay in the digit engine and are exact up to the final
// rounding. Everything else crosses the decimal bridge at the context's
// decimal scale, is evaluated by a `DecimalBackend`, and comes back through
// the multiplication tail fix-up.

use super::config::{self, PrecisionContext};
use super::fraction::SezimalFraction;
use super::integer::SezimalInteger;
use super::sezimal::Sezimal;
use super::value::SezimalValue;
use crate::engine::{self, Magnitude, Sign};
use crate::interfaces::{BigDecimalBackend, DecimalBackend};
use crate::numeric::{NumericError, NumericResult};
use bigdecimal::BigDecimal;

/// One half, `0.3` in base six
const HALF: &str = "0.3";

impl Sezimal {
    // ========================================================================
    // Integer Powers
    // ========================================================================

    /// `self` raised to an integer power under the process-wide context.
    pub fn powi(&self, exponent: i64) -> NumericResult<Self> {
        self.powi_with(exponent, config::current())
    }

    /// `self` raised to an integer power by exact repeated squaring.
    ///
    /// The product is finalized once at the end; a negative exponent takes
    /// the reciprocal of the positive power. `x^0` is one for every `x`.
    /// Work is logarithmic in the exponent, though the exact intermediate
    /// power still carries every digit the result has before rounding.
    ///
    /// # Errors
    /// `Domain` for zero raised to a negative power.
    pub fn powi_with(&self, exponent: i64, ctx: &PrecisionContext) -> NumericResult<Self> {
        if exponent == 0 {
            return Ok(Self::one());
        }
        if self.is_zero() && exponent < 0 {
            return Err(NumericError::domain("zero raised to a negative power"));
        }

        let count = exponent.unsigned_abs();
        let product = engine::power(self.magnitude(), count);
        let sign = if self.is_negative() && count % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };

        let magnitude = if exponent > 0 {
            engine::finalize(&product, ctx)
        } else {
            engine::divide(&Magnitude::one(), &product, ctx)?
        };
        Ok(Self::from_parts(sign, magnitude))
    }

    // ========================================================================
    // Backend Operations
    // ========================================================================

    /// `self ^ exponent` with the default backend and context.
    pub fn pow(&self, exponent: &Sezimal) -> NumericResult<Self> {
        self.pow_with(exponent, &BigDecimalBackend, config::current())
    }

    /// `self ^ exponent`.
    ///
    /// Integer exponents go through [`Sezimal::powi_with`]; others are
    /// evaluated by `backend` in the decimal domain.
    ///
    /// # Errors
    /// `Domain` for zero to a negative power or a negative base with a
    /// fractional exponent, `Overflow` for integer exponents beyond `i64`
    /// or results the backend cannot represent.
    pub fn pow_with(
        &self,
        exponent: &Sezimal,
        backend: &dyn DecimalBackend,
        ctx: &PrecisionContext,
    ) -> NumericResult<Self> {
        if exponent.is_integer() {
            return self.powi_with(exponent.to_native()?, ctx);
        }
        let value = backend.pow(
            &self.decimal_with(ctx),
            &exponent.decimal_with(ctx),
            ctx.decimal_scale(),
        )?;
        Ok(Self::from_backend(value, ctx))
    }

    /// Square root, computed as `self ^ 0.3`.
    pub fn sqrt(&self) -> NumericResult<Self> {
        self.sqrt_with(&BigDecimalBackend, config::current())
    }

    pub fn sqrt_with(
        &self,
        backend: &dyn DecimalBackend,
        ctx: &PrecisionContext,
    ) -> NumericResult<Self> {
        let half: Sezimal = HALF.parse()?;
        self.pow_with(&half, backend, ctx)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> NumericResult<Self> {
        self.ln_with(&BigDecimalBackend, config::current())
    }

    /// # Errors
    /// `Domain` for values `<= 0`.
    pub fn ln_with(&self, backend: &dyn DecimalBackend, ctx: &PrecisionContext) -> NumericResult<Self> {
        let value = backend.ln(&self.decimal_with(ctx), ctx.decimal_scale())?;
        Ok(Self::from_backend(value, ctx))
    }

    /// `e ^ self`.
    pub fn exp(&self) -> NumericResult<Self> {
        self.exp_with(&BigDecimalBackend, config::current())
    }

    pub fn exp_with(&self, backend: &dyn DecimalBackend, ctx: &PrecisionContext) -> NumericResult<Self> {
        let value = backend.exp(&self.decimal_with(ctx), ctx.decimal_scale())?;
        Ok(Self::from_backend(value, ctx))
    }

    /// Logarithm in the sezimal base, `log₁₀₆`.
    pub fn log(&self) -> NumericResult<Self> {
        self.log_base_with(&BigDecimal::from(6), &BigDecimalBackend, config::current())
    }

    pub fn log2(&self) -> NumericResult<Self> {
        self.log_base_with(&BigDecimal::from(2), &BigDecimalBackend, config::current())
    }

    /// Logarithm in base ten (`14₆`).
    pub fn log14(&self) -> NumericResult<Self> {
        self.log_base_with(&BigDecimal::from(10), &BigDecimalBackend, config::current())
    }

    /// `ln(self) / ln(base)` through the backend.
    ///
    /// # Errors
    /// `Domain` for values `<= 0` or a base of one.
    pub fn log_base_with(
        &self,
        base: &BigDecimal,
        backend: &dyn DecimalBackend,
        ctx: &PrecisionContext,
    ) -> NumericResult<Self> {
        let value = backend.log(&self.decimal_with(ctx), base, ctx.decimal_scale())?;
        Ok(Self::from_backend(value, ctx))
    }

    /// `n!` for a non-negative integer value.
    ///
    /// # Errors
    /// `Domain` for negative or fractional values.
    pub fn factorial(&self) -> NumericResult<SezimalInteger> {
        let integer = SezimalInteger::try_from(self.clone())
            .map_err(|_| NumericError::domain(format!("factorial of non-integer {self}")))?;
        integer.factorial()
    }

    /// Converts a backend result and applies the tail fix-up.
    fn from_backend(value: BigDecimal, ctx: &PrecisionContext) -> Self {
        let converted = Self::from_decimal_with(value, ctx);
        Self::from_parts(converted.sign(), engine::finalize(converted.magnitude(), ctx))
    }
}

impl SezimalFraction {
    /// `self ^ exponent`.
    ///
    /// Integer exponents keep the result rational; other exponents raise
    /// the approximate value.
    pub fn pow(&self, exponent: &Sezimal) -> NumericResult<SezimalValue> {
        if exponent.is_integer() {
            return self.powi(exponent.to_native()?).map(SezimalValue::Fraction);
        }
        self.approx().pow(exponent).map(SezimalValue::Real)
    }
}
