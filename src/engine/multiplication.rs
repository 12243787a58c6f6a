// ============================================================================
// Multiplication
// Schoolbook digit-by-digit product of two magnitudes
// ============================================================================

use super::addition::add_lsb;
use super::magnitude::{Digits, Magnitude};
use crate::numeric::tables::multiply_digits;

/// Multiplies a least-significant-first digit run by a single digit.
pub(crate) fn multiply_lsb_by_digit(lsb: &[u8], digit: u8) -> Digits {
    let mut product = Digits::with_capacity(lsb.len() + 1);
    let mut carry = 0;
    for &d in lsb {
        let (next_carry, low) = multiply_digits(digit, d, carry);
        product.push(low);
        carry = next_carry;
    }
    if carry != 0 {
        product.push(carry);
    }
    product
}

/// Exact product of two magnitudes.
///
/// The result has `a.precision() + b.precision()` fractional digits, except
/// on the fast paths: a zero operand yields the integer zero and a unit
/// operand yields a copy of the other one.
pub fn multiply(a: &Magnitude, b: &Magnitude) -> Magnitude {
    if a.is_zero() || b.is_zero() {
        return Magnitude::zero();
    }
    if b.is_one() {
        return a.clone();
    }
    if a.is_one() {
        return b.clone();
    }

    let lsb_a = a.to_lsb(a.precision());
    let lsb_b = b.to_lsb(b.precision());
    let mut total = Digits::new();

    for (shift, &digit) in lsb_a.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        // Partial product shifted `shift` places to the left
        let mut partial: Digits = smallvec::smallvec![0; shift];
        partial.extend(multiply_lsb_by_digit(&lsb_b, digit));
        total = add_lsb(&total, &partial);
    }

    Magnitude::from_lsb(&total, a.precision() + b.precision())
}

/// Exact `base ^ exponent` by repeated squaring.
///
/// Trailing fractional zeros of the base are dropped first, so the number
/// of multiplications is logarithmic in the exponent and the digit count
/// grows only as far as the exact result needs.
pub fn power(base: &Magnitude, exponent: u64) -> Magnitude {
    let mut base = base.trimmed();
    let mut exponent = exponent;
    let mut result = Magnitude::one();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = multiply(&result, &base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = multiply(&base, &base);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::magnitude::mag;

    #[test]
    fn test_multiply_small() {
        assert_eq!(multiply(&mag("2"), &mag("3")).to_string(), "10");
        assert_eq!(multiply(&mag("5"), &mag("5")).to_string(), "41");
        assert_eq!(multiply(&mag("55"), &mag("55")).to_string(), "5401");
    }

    #[test]
    fn test_multiply_precision_is_summed() {
        assert_eq!(multiply(&mag("0.3"), &mag("2")).to_string(), "1.0");
        assert_eq!(multiply(&mag("1.5"), &mag("0.02")).to_string(), "0.034");
        assert_eq!(multiply(&mag("0.01"), &mag("0.01")).to_string(), "0.0001");
    }

    #[test]
    fn test_multiply_fast_paths() {
        assert_eq!(multiply(&mag("0.00"), &mag("123.4")), mag("0"));
        assert_eq!(multiply(&mag("123.4"), &mag("1")), mag("123.4"));
        assert_eq!(multiply(&mag("1.0"), &mag("123.4")), mag("123.4"));
    }

    #[test]
    fn test_multiply_commutes() {
        let a = mag("4025.13");
        let b = mag("0.552");
        assert_eq!(multiply(&a, &b), multiply(&b, &a));
    }

    #[test]
    fn test_multiply_by_digit() {
        // 345₆ × 4 = 2312₆
        let lsb = multiply_lsb_by_digit(&[5, 4, 3], 4);
        assert_eq!(lsb.as_slice(), &[2, 1, 3, 2]);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(&mag("2"), 0), mag("1"));
        assert_eq!(power(&mag("2"), 3).to_string(), "12");
        assert_eq!(power(&mag("2"), 10).to_string(), "4424");
        assert_eq!(power(&mag("0.3"), 2).to_string(), "0.13");
        assert_eq!(power(&mag("1.10"), 2).to_string(), "1.21");
    }

    #[test]
    fn test_power_of_unit_and_zero_base_is_immediate() {
        assert_eq!(power(&mag("1.000"), u64::MAX), mag("1"));
        assert_eq!(power(&mag("0.0"), u64::MAX), mag("0"));
        assert_eq!(power(&mag("10"), 40), power(&mag("100"), 20));
    }
}
