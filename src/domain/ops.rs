// ============================================================================
// Operator Traits
// std::ops implementations for the three value types
// ============================================================================
//
// Every operation is written once for references; owned and mixed
// combinations forward to it. `+`, `-`, `×` and negation are infallible.
// `/` and `%` panic on a zero divisor like native integer division; use
// the `checked_*` methods to handle that case.

use super::config;
use super::fraction::SezimalFraction;
use super::integer::SezimalInteger;
use super::sezimal::Sezimal;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

const DIVIDE_BY_ZERO: &str = "attempt to divide a sezimal value by zero";

/// Implements `$imp` for the owned and mixed operand combinations by
/// forwarding to the `&$lhs op &$rhs` implementation.
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
        impl $imp<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &$rhs) -> $out {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<$rhs> for &$lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Implements `$imp` (e.g. `AddAssign`) through the matching binary operator.
macro_rules! forward_assign_op {
    ($imp:ident, $method:ident, $op:ident, $op_method:ident, $ty:ty) => {
        impl $imp<&$ty> for $ty {
            #[inline]
            fn $method(&mut self, rhs: &$ty) {
                *self = $op::$op_method(&*self, rhs);
            }
        }

        impl $imp<$ty> for $ty {
            #[inline]
            fn $method(&mut self, rhs: $ty) {
                *self = $op::$op_method(&*self, &rhs);
            }
        }
    };
}

// ============================================================================
// Sezimal
// ============================================================================

impl Add<&Sezimal> for &Sezimal {
    type Output = Sezimal;

    fn add(self, rhs: &Sezimal) -> Sezimal {
        self.plus(rhs)
    }
}

impl Sub<&Sezimal> for &Sezimal {
    type Output = Sezimal;

    fn sub(self, rhs: &Sezimal) -> Sezimal {
        self.minus(rhs)
    }
}

impl Mul<&Sezimal> for &Sezimal {
    type Output = Sezimal;

    /// Product finalized under the process-wide context
    fn mul(self, rhs: &Sezimal) -> Sezimal {
        self.mul_with(rhs, config::current())
    }
}

impl Div<&Sezimal> for &Sezimal {
    type Output = Sezimal;

    fn div(self, rhs: &Sezimal) -> Sezimal {
        self.checked_div(rhs).expect(DIVIDE_BY_ZERO)
    }
}

impl Rem<&Sezimal> for &Sezimal {
    type Output = Sezimal;

    /// Floor remainder of the integer parts
    fn rem(self, rhs: &Sezimal) -> Sezimal {
        self.checked_rem(rhs).expect(DIVIDE_BY_ZERO)
    }
}

impl Neg for &Sezimal {
    type Output = Sezimal;

    fn neg(self) -> Sezimal {
        self.negated()
    }
}

impl Neg for Sezimal {
    type Output = Sezimal;

    fn neg(self) -> Sezimal {
        self.negated()
    }
}

forward_ref_binop!(Add, add, Sezimal, Sezimal, Sezimal);
forward_ref_binop!(Sub, sub, Sezimal, Sezimal, Sezimal);
forward_ref_binop!(Mul, mul, Sezimal, Sezimal, Sezimal);
forward_ref_binop!(Div, div, Sezimal, Sezimal, Sezimal);
forward_ref_binop!(Rem, rem, Sezimal, Sezimal, Sezimal);

forward_assign_op!(AddAssign, add_assign, Add, add, Sezimal);
forward_assign_op!(SubAssign, sub_assign, Sub, sub, Sezimal);
forward_assign_op!(MulAssign, mul_assign, Mul, mul, Sezimal);

impl Sum for Sezimal {
    fn sum<I: Iterator<Item = Sezimal>>(iter: I) -> Self {
        iter.fold(Sezimal::zero(), |acc, value| &acc + &value)
    }
}

impl<'a> Sum<&'a Sezimal> for Sezimal {
    fn sum<I: Iterator<Item = &'a Sezimal>>(iter: I) -> Self {
        iter.fold(Sezimal::zero(), |acc, value| &acc + value)
    }
}

impl Product for Sezimal {
    fn product<I: Iterator<Item = Sezimal>>(iter: I) -> Self {
        iter.fold(Sezimal::one(), |acc, value| &acc * &value)
    }
}

// ============================================================================
// SezimalInteger
// ============================================================================

fn integral(value: Sezimal) -> SezimalInteger {
    // Sums, differences and products of integers carry no fraction
    SezimalInteger::try_from(value).unwrap_or_default()
}

impl Add<&SezimalInteger> for &SezimalInteger {
    type Output = SezimalInteger;

    fn add(self, rhs: &SezimalInteger) -> SezimalInteger {
        integral(self.as_sezimal().plus(rhs))
    }
}

impl Sub<&SezimalInteger> for &SezimalInteger {
    type Output = SezimalInteger;

    fn sub(self, rhs: &SezimalInteger) -> SezimalInteger {
        integral(self.as_sezimal().minus(rhs))
    }
}

impl Mul<&SezimalInteger> for &SezimalInteger {
    type Output = SezimalInteger;

    fn mul(self, rhs: &SezimalInteger) -> SezimalInteger {
        integral(self.as_sezimal() * rhs.as_sezimal())
    }
}

impl Rem<&SezimalInteger> for &SezimalInteger {
    type Output = SezimalInteger;

    fn rem(self, rhs: &SezimalInteger) -> SezimalInteger {
        self.checked_rem(rhs).expect(DIVIDE_BY_ZERO)
    }
}

impl Neg for &SezimalInteger {
    type Output = SezimalInteger;

    fn neg(self) -> SezimalInteger {
        integral(self.as_sezimal().negated())
    }
}

impl Neg for SezimalInteger {
    type Output = SezimalInteger;

    fn neg(self) -> SezimalInteger {
        -&self
    }
}

forward_ref_binop!(Add, add, SezimalInteger, SezimalInteger, SezimalInteger);
forward_ref_binop!(Sub, sub, SezimalInteger, SezimalInteger, SezimalInteger);
forward_ref_binop!(Mul, mul, SezimalInteger, SezimalInteger, SezimalInteger);
forward_ref_binop!(Rem, rem, SezimalInteger, SezimalInteger, SezimalInteger);

forward_assign_op!(AddAssign, add_assign, Add, add, SezimalInteger);
forward_assign_op!(SubAssign, sub_assign, Sub, sub, SezimalInteger);
forward_assign_op!(MulAssign, mul_assign, Mul, mul, SezimalInteger);

// ============================================================================
// SezimalFraction
// ============================================================================

impl Mul<&SezimalFraction> for &SezimalFraction {
    type Output = SezimalFraction;

    fn mul(self, rhs: &SezimalFraction) -> SezimalFraction {
        self.mul_fraction(rhs)
    }
}

impl Mul<&SezimalInteger> for &SezimalFraction {
    type Output = SezimalFraction;

    fn mul(self, rhs: &SezimalInteger) -> SezimalFraction {
        self.mul_integer(rhs)
    }
}

impl Mul<&SezimalFraction> for &SezimalInteger {
    type Output = SezimalFraction;

    fn mul(self, rhs: &SezimalFraction) -> SezimalFraction {
        rhs.mul_integer(self)
    }
}

impl Div<&SezimalFraction> for &SezimalFraction {
    type Output = SezimalFraction;

    fn div(self, rhs: &SezimalFraction) -> SezimalFraction {
        self.checked_div_fraction(rhs).expect(DIVIDE_BY_ZERO)
    }
}

impl Div<&SezimalInteger> for &SezimalFraction {
    type Output = SezimalFraction;

    fn div(self, rhs: &SezimalInteger) -> SezimalFraction {
        self.checked_div_integer(rhs).expect(DIVIDE_BY_ZERO)
    }
}

impl Div<&SezimalFraction> for &SezimalInteger {
    type Output = SezimalFraction;

    fn div(self, rhs: &SezimalFraction) -> SezimalFraction {
        SezimalFraction::from(self.clone())
            .checked_div_fraction(rhs)
            .expect(DIVIDE_BY_ZERO)
    }
}

impl Add<&SezimalFraction> for &SezimalFraction {
    type Output = Sezimal;

    /// Sum of the approximations
    fn add(self, rhs: &SezimalFraction) -> Sezimal {
        self.approx() + rhs.approx()
    }
}

impl Sub<&SezimalFraction> for &SezimalFraction {
    type Output = Sezimal;

    /// Difference of the approximations
    fn sub(self, rhs: &SezimalFraction) -> Sezimal {
        self.approx() - rhs.approx()
    }
}

impl Neg for &SezimalFraction {
    type Output = SezimalFraction;

    fn neg(self) -> SezimalFraction {
        self.mul_integer(&SezimalInteger::from(-1i64))
    }
}

impl Neg for SezimalFraction {
    type Output = SezimalFraction;

    fn neg(self) -> SezimalFraction {
        -&self
    }
}

forward_ref_binop!(Mul, mul, SezimalFraction, SezimalFraction, SezimalFraction);
forward_ref_binop!(Mul, mul, SezimalFraction, SezimalInteger, SezimalFraction);
forward_ref_binop!(Mul, mul, SezimalInteger, SezimalFraction, SezimalFraction);
forward_ref_binop!(Div, div, SezimalFraction, SezimalFraction, SezimalFraction);
forward_ref_binop!(Div, div, SezimalFraction, SezimalInteger, SezimalFraction);
forward_ref_binop!(Div, div, SezimalInteger, SezimalFraction, SezimalFraction);
forward_ref_binop!(Add, add, SezimalFraction, SezimalFraction, Sezimal);
forward_ref_binop!(Sub, sub, SezimalFraction, SezimalFraction, Sezimal);
