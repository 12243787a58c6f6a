// ============================================================================
// Property Tests
// Algebraic laws of the value types over generated numerals
// ============================================================================

use super::{Sezimal, SezimalFraction, SezimalInteger};
use crate::engine::{Magnitude, Sign};
use proptest::prelude::*;
use quickcheck::quickcheck;

// Canonical numerals: no leading zeros, at most five fractional digits
fn numeral() -> impl Strategy<Value = String> {
    "-?(0|[1-5][0-5]{0,6})(\\.[0-5]{1,5})?"
}

// Up to forty integer and twenty fractional digits, past what a 28-digit
// decimal holds
fn wide_numeral() -> impl Strategy<Value = String> {
    "-?(0|[1-5][0-5]{0,40})(\\.[0-5]{1,20})?"
}

fn value() -> impl Strategy<Value = Sezimal> {
    numeral().prop_map(|text| text.parse::<Sezimal>().unwrap())
}

fn non_zero_value() -> impl Strategy<Value = Sezimal> {
    value().prop_filter("divisor must be non-zero", |v| !v.is_zero())
}

fn small_int() -> impl Strategy<Value = i64> {
    -50_000i64..50_000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-5_000i64..=-1i64), (1i64..=5_000i64)]
}

/// `count` units in the last place of the default working precision
fn units(count: &Sezimal) -> Sezimal {
    count * &Sezimal::from_parts(Sign::Positive, Magnitude::unit(20))
}

proptest! {
    #[test]
    fn numeral_round_trip(text in numeral()) {
        let value: Sezimal = text.parse().unwrap();
        let expected = if value.is_zero() { text.trim_start_matches('-') } else { text.as_str() };
        prop_assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn add_commutative(a in value(), b in value()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in value(), b in value(), c in value()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutative(a in value(), b in value()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn identities(a in value()) {
        let zero = Sezimal::zero();
        let one = Sezimal::one();
        prop_assert_eq!(&a + &zero, a.clone());
        prop_assert_eq!(&a * &one, a.clone());
        prop_assert_eq!(&a * &zero, zero.clone());
        prop_assert_eq!(&a - &a, zero);
    }

    #[test]
    fn subtraction_inverts_addition(a in value(), b in value()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn division_inverse(a in value(), b in non_zero_value()) {
        let restored = &(&a / &b) * &b;
        let tolerance = units(&(&(&b.abs() + &Sezimal::one()) * &Sezimal::from(3i64)));
        prop_assert!(
            (&restored - &a).abs() <= tolerance,
            "({} / {}) * {} = {}", a, b, b, restored
        );
    }

    #[test]
    fn floor_division_invariant(a in small_int(), b in non_zero_int()) {
        let a = SezimalInteger::from(a);
        let b = SezimalInteger::from(b);
        let (quotient, remainder) = a.checked_divmod(&b).unwrap();
        prop_assert_eq!(&(&b * &quotient) + &remainder, a);
        prop_assert!(remainder.is_zero() || remainder.is_negative() == b.is_negative());
    }

    #[test]
    fn ordering_matches_difference(a in value(), b in value()) {
        let difference = &a - &b;
        prop_assert_eq!(a.cmp(&b), difference.signum().cmp(&Sezimal::zero()));
    }

    #[test]
    fn radix_round_trip(a in value()) {
        prop_assert_eq!(Sezimal::from_dozenal(&a.to_dozenal()).unwrap(), a.clone());
        prop_assert_eq!(Sezimal::from_niftimal(&a.to_niftimal()).unwrap(), a);
    }

    #[test]
    fn decimal_round_trip(text in wide_numeral()) {
        let a = text.parse::<Sezimal>().unwrap();
        prop_assert_eq!(Sezimal::from_decimal(a.decimal().clone()), a);
    }

    #[test]
    fn integer_ratio_is_exact(a in value()) {
        let (numerator, denominator) = a.as_integer_ratio();
        prop_assert_eq!(numerator.gcd(&denominator), SezimalInteger::one());
        let fraction = SezimalFraction::from_pair(numerator, denominator).unwrap();
        prop_assert_eq!(fraction.approx().clone(), a);
    }

    #[test]
    fn fraction_times_denominator_is_numerator(n in small_int(), d in non_zero_int()) {
        let fraction = SezimalFraction::from_pair(n.into(), d.into()).unwrap();
        let product = &fraction * &SezimalInteger::from(d);
        prop_assert_eq!(product.approx().clone(), Sezimal::from(n));
    }
}

// ============================================================================
// Integer Ring Against Native Arithmetic
// ============================================================================

fn native_divmod(a: i64, b: i64) -> (i64, i64) {
    let (quotient, remainder) = (a / b, a % b);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        (quotient - 1, remainder + b)
    } else {
        (quotient, remainder)
    }
}

quickcheck! {
    fn integer_add_matches_native(a: i32, b: i32) -> bool {
        let sum = SezimalInteger::from(a) + SezimalInteger::from(b);
        sum.to_native() == Ok(i64::from(a) + i64::from(b))
    }

    fn integer_sub_matches_native(a: i32, b: i32) -> bool {
        let difference = SezimalInteger::from(a) - SezimalInteger::from(b);
        difference.to_native() == Ok(i64::from(a) - i64::from(b))
    }

    fn integer_mul_matches_native(a: i32, b: i32) -> bool {
        let product = SezimalInteger::from(a) * SezimalInteger::from(b);
        product.to_native() == Ok(i64::from(a) * i64::from(b))
    }

    fn integer_divmod_matches_native(a: i32, b: i32) -> bool {
        if b == 0 {
            return SezimalInteger::from(a).checked_divmod(&SezimalInteger::from(b)).is_err();
        }
        let (quotient, remainder) = SezimalInteger::from(a)
            .checked_divmod(&SezimalInteger::from(b))
            .unwrap();
        (quotient.to_native().unwrap(), remainder.to_native().unwrap())
            == native_divmod(i64::from(a), i64::from(b))
    }

    fn integer_ordering_matches_native(a: i64, b: i64) -> bool {
        SezimalInteger::from(a).cmp(&SezimalInteger::from(b)) == a.cmp(&b)
    }

    fn native_round_trip(a: i64) -> bool {
        Sezimal::from(a).to_native() == Ok(a)
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use super::super::SezimalValue;

    proptest! {
        #[test]
        fn serde_json_round_trip(a in value()) {
            let json = serde_json::to_string(&a).unwrap();
            prop_assert_eq!(json.clone(), format!("\"{a}\""));
            let back: Sezimal = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, a);
        }
    }

    #[test]
    fn test_integer_and_fraction_serialize_as_text() {
        let integer: SezimalInteger = "-12".parse().unwrap();
        assert_eq!(serde_json::to_string(&integer).unwrap(), "\"-12\"");

        let fraction: SezimalFraction = serde_json::from_str("\"4/2\"").unwrap();
        assert_eq!(fraction.to_string(), "2/1");
        assert_eq!(SezimalValue::from(fraction), SezimalValue::from(SezimalInteger::from(2i64)));

        assert!(serde_json::from_str::<SezimalInteger>("\"1.3\"").is_err());
    }
}
