// ============================================================================
// Division
// Reciprocal-first division, long division and integral divmod
// ============================================================================

use super::addition::subtract;
use super::magnitude::{Digits, Magnitude};
use super::multiplication::{multiply, multiply_lsb_by_digit};
use super::rounding::finalize;
use crate::domain::config::PrecisionContext;
use crate::numeric::reciprocal::lookup;
use crate::numeric::tables::MAX_DIGIT;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;

/// Quotient and remainder of a digit-by-digit long division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LongDivision {
    pub quotient: Magnitude,
    /// Remainder of the division of the scaled (integer) operands
    pub remainder: Magnitude,
}

/// Appends one digit to an integral magnitude, i.e. `value × 10₆ + digit`.
fn shift_in(value: &Magnitude, digit: u8) -> Magnitude {
    Magnitude::new(
        value.integer().iter().copied().chain(std::iter::once(digit)),
        std::iter::empty(),
    )
}

/// Largest digit `d` with `multiples[d] <= remainder`, and the new remainder.
fn divide_step(remainder: &Magnitude, multiples: &[Magnitude]) -> (u8, Magnitude) {
    for d in (1..=MAX_DIGIT).rev() {
        let multiple = &multiples[d as usize];
        if multiple.cmp_value(remainder) != Ordering::Greater {
            let (rest, _) = subtract(remainder, multiple);
            return (d, rest);
        }
    }
    (0, remainder.clone())
}

/// Divides `dividend` by a non-zero `divisor` one output digit at a time.
///
/// Both operands are first brought to the same precision and read as
/// integers. Fractional quotient digits keep coming until the remainder
/// is exactly zero or `fraction_limit` digits have been produced.
pub(crate) fn long_divide(
    dividend: &Magnitude,
    divisor: &Magnitude,
    fraction_limit: usize,
) -> LongDivision {
    debug_assert!(!divisor.is_zero());

    let precision = dividend.precision().max(divisor.precision());
    let dividend = dividend.pad_to(precision).scaled_to_integer();
    let divisor = divisor.pad_to(precision).scaled_to_integer();

    let divisor_lsb = divisor.to_lsb(0);
    let multiples: Vec<Magnitude> = (0..=MAX_DIGIT)
        .map(|d| Magnitude::from_lsb(&multiply_lsb_by_digit(&divisor_lsb, d), 0))
        .collect();

    let mut remainder = Magnitude::zero();
    let mut integer = Digits::with_capacity(dividend.integer().len());
    for &digit in dividend.integer() {
        let (q, rest) = divide_step(&shift_in(&remainder, digit), &multiples);
        integer.push(q);
        remainder = rest;
    }

    let mut fraction = Digits::new();
    while !remainder.is_zero() && fraction.len() < fraction_limit {
        let (q, rest) = divide_step(&shift_in(&remainder, 0), &multiples);
        fraction.push(q);
        remainder = rest;
    }

    if !remainder.is_zero() && fraction_limit > 0 {
        tracing::trace!(
            %divisor,
            digits = fraction_limit,
            "long division cut off before the remainder reached zero"
        );
    }

    LongDivision {
        quotient: Magnitude::new(integer, fraction),
        remainder,
    }
}

/// `1 / divisor`, from the reciprocal table when the divisor is a listed
/// integer, otherwise by long division up to twice the working precision.
///
/// # Errors
/// `DivisionByZero` if the divisor is zero.
pub fn reciprocal(divisor: &Magnitude, ctx: &PrecisionContext) -> NumericResult<Magnitude> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if divisor.is_one() {
        return Ok(Magnitude::one());
    }

    let limit = ctx.max_precision.max(divisor.precision()) * 2;

    if divisor.precision() == 0 {
        if let Some(entry) = lookup(&divisor.to_string()) {
            tracing::trace!(divisor = entry.divisor, "reciprocal table hit");
            return Ok(Magnitude::new([0], entry.expand(limit)));
        }
    }

    Ok(long_divide(&Magnitude::one(), divisor, limit).quotient)
}

/// `dividend / divisor` as `dividend × (1 / divisor)`, finalized to the
/// working precision.
///
/// # Errors
/// `DivisionByZero` if the divisor is zero.
pub fn divide(
    dividend: &Magnitude,
    divisor: &Magnitude,
    ctx: &PrecisionContext,
) -> NumericResult<Magnitude> {
    let inverse = reciprocal(divisor, ctx)?;
    Ok(finalize(&multiply(dividend, &inverse), ctx))
}

/// Truncating quotient and remainder of two integral magnitudes.
///
/// Fractional digits of either operand are ignored.
///
/// # Errors
/// `DivisionByZero` if the integral part of the divisor is zero.
pub fn divide_integral(
    dividend: &Magnitude,
    divisor: &Magnitude,
) -> NumericResult<(Magnitude, Magnitude)> {
    let dividend = dividend.integral();
    let divisor = divisor.integral();
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if divisor.is_one() {
        return Ok((dividend, Magnitude::zero()));
    }

    let LongDivision {
        quotient,
        remainder,
    } = long_divide(&dividend, &divisor, 0);
    Ok((quotient, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::magnitude::mag;
    use crate::numeric::reciprocal::RECIPROCALS;

    fn ctx() -> PrecisionContext {
        PrecisionContext::default()
    }

    #[test]
    fn test_reciprocal_table_hit() {
        assert_eq!(reciprocal(&mag("2"), &ctx()).unwrap(), mag("0.3"));
        assert_eq!(reciprocal(&mag("10"), &ctx()).unwrap(), mag("0.1"));
    }

    #[test]
    fn test_reciprocal_periodic_expands_to_limit() {
        let fifth = reciprocal(&mag("5"), &ctx()).unwrap();
        assert_eq!(fifth.precision(), ctx().division_limit());
        assert!(fifth.fraction().iter().all(|&d| d == 1));
    }

    #[test]
    fn test_reciprocal_long_division() {
        // 1/0.3 = 2
        assert_eq!(reciprocal(&mag("0.3"), &ctx()).unwrap().cmp_value(&mag("2")), Ordering::Equal);
        // 1/400₆ (one hundred forty-four) = 0.0013₆
        assert_eq!(reciprocal(&mag("400"), &ctx()).unwrap(), mag("0.0013"));
    }

    #[test]
    fn test_reciprocal_of_zero_fails() {
        assert_eq!(reciprocal(&mag("0.00"), &ctx()), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_reciprocal_of_one() {
        assert_eq!(reciprocal(&mag("1.0"), &ctx()).unwrap(), mag("1"));
    }

    #[test]
    fn test_table_matches_long_division() {
        let limit = ctx().division_limit();
        for entry in RECIPROCALS.iter() {
            let computed = long_divide(&Magnitude::one(), &mag(entry.divisor), limit).quotient;
            assert_eq!(
                computed.fraction(),
                entry.expand(limit).as_slice(),
                "1/{}",
                entry.divisor
            );
            assert_eq!(computed.integer(), &[0]);
        }
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(&mag("1"), &mag("2"), &ctx()).unwrap(), mag("0.3"));
        assert_eq!(divide(&mag("10"), &mag("3"), &ctx()).unwrap(), mag("2.0"));
        assert_eq!(divide(&mag("0"), &mag("5"), &ctx()).unwrap(), mag("0"));
        assert_eq!(divide(&mag("1"), &mag("0"), &ctx()), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_divide_periodic_result_is_bounded() {
        let third_of_five = divide(&mag("5"), &mag("3"), &ctx()).unwrap();
        assert_eq!(third_of_five, mag("1.4"));

        let fifth = divide(&mag("1"), &mag("5"), &ctx()).unwrap();
        assert_eq!(fifth.precision(), ctx().max_precision);
    }

    #[test]
    fn test_divide_integral() {
        let (q, r) = divide_integral(&mag("100"), &mag("5")).unwrap();
        assert_eq!((q, r), (mag("11"), mag("1")));

        let (q, r) = divide_integral(&mag("54.3"), &mag("2.5")).unwrap();
        assert_eq!((q, r), (mag("25"), mag("0")));

        let (q, r) = divide_integral(&mag("3"), &mag("4")).unwrap();
        assert_eq!((q, r), (mag("0"), mag("3")));

        assert_eq!(divide_integral(&mag("3"), &mag("0.5")), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_long_divide_exact_fraction() {
        let result = long_divide(&mag("1.3"), &mag("0.2"), 10);
        assert_eq!(result.quotient, mag("4.3"));
        assert!(result.remainder.is_zero());
    }
}
