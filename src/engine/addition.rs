// ============================================================================
// Addition & Subtraction
// Digit-by-digit carry and borrow propagation over aligned magnitudes
// ============================================================================

use super::magnitude::{Digits, Magnitude, Sign};
use crate::numeric::tables::{add_digits, BORROWED, SUBTRACTION};
use std::cmp::Ordering;

/// Adds two least-significant-first digit runs of the same scale.
pub(crate) fn add_lsb(a: &[u8], b: &[u8]) -> Digits {
    let width = a.len().max(b.len());
    let mut sum = Digits::with_capacity(width + 1);
    let mut carry = 0;

    for i in 0..width {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let (next_carry, digit) = add_digits(x, y, carry);
        sum.push(digit);
        carry = next_carry;
    }

    if carry != 0 {
        sum.push(carry);
    }
    sum
}

/// Subtracts `b` from `a` (both least significant first, `a >= b`).
///
/// A borrow walks left until a non-zero digit absorbs it; every zero it
/// crosses becomes 5.
pub(crate) fn subtract_lsb(a: &[u8], b: &[u8]) -> Digits {
    let mut minuend: Digits = a.iter().copied().collect();
    let mut difference = Digits::with_capacity(minuend.len());

    for i in 0..minuend.len() {
        let y = b.get(i).copied().unwrap_or(0);
        let (borrow, digit) = SUBTRACTION[minuend[i] as usize][y as usize];
        difference.push(digit);

        if borrow != 0 {
            let mut j = i + 1;
            while j < minuend.len() {
                let lender = minuend[j];
                minuend[j] = BORROWED[lender as usize];
                if lender != 0 {
                    break;
                }
                j += 1;
            }
        }
    }
    difference
}

/// Sum of two magnitudes; the result carries the larger of the two precisions.
pub fn add(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let precision = a.precision().max(b.precision());
    let sum = add_lsb(&a.to_lsb(precision), &b.to_lsb(precision));
    Magnitude::from_lsb(&sum, precision)
}

/// Distance between two magnitudes.
///
/// When `a < b` the operands are swapped and the returned flag is `true`,
/// meaning the true difference `a - b` is negative.
pub fn subtract(a: &Magnitude, b: &Magnitude) -> (Magnitude, bool) {
    let precision = a.precision().max(b.precision());
    let swapped = a.cmp_value(b) == Ordering::Less;
    let (larger, smaller) = if swapped { (b, a) } else { (a, b) };
    let difference = subtract_lsb(&larger.to_lsb(precision), &smaller.to_lsb(precision));
    (Magnitude::from_lsb(&difference, precision), swapped)
}

/// `(sign_a × a) + (sign_b × b)`, dispatched to magnitude addition or
/// subtraction by the operand signs. Zero results are always positive.
pub fn signed_add(
    sign_a: Sign,
    a: &Magnitude,
    sign_b: Sign,
    b: &Magnitude,
) -> (Sign, Magnitude) {
    let (sign, magnitude) = if sign_a == sign_b {
        (sign_a, add(a, b))
    } else {
        // The dominant magnitude decides the sign
        let (difference, swapped) = subtract(a, b);
        let sign = if swapped { sign_b } else { sign_a };
        (sign, difference)
    };

    if magnitude.is_zero() {
        (Sign::Positive, magnitude)
    } else {
        (sign, magnitude)
    }
}

/// `(sign_a × a) - (sign_b × b)`
pub fn signed_subtract(
    sign_a: Sign,
    a: &Magnitude,
    sign_b: Sign,
    b: &Magnitude,
) -> (Sign, Magnitude) {
    signed_add(sign_a, a, sign_b.negate(), b)
}
