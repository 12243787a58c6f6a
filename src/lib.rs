// ============================================================================
// Sezimal Library
// Arbitrary-precision base-6 arithmetic with integer and rational types
// ============================================================================

//! # Sezimal
//!
//! Arbitrary-precision arithmetic in base six, carried out directly on
//! digit vectors.
//!
//! ## Features
//!
//! - **Three value types**: [`Sezimal`](domain::Sezimal) (general),
//!   [`SezimalInteger`](domain::SezimalInteger) and
//!   [`SezimalFraction`](domain::SezimalFraction) (exact numerator/denominator)
//! - **Digit-table engine** for addition, multiplication and reciprocal-first division
//! - **Explicit precision context** bounding every rounding step
//! - **Cross-radix bridges** to `rust_decimal`, dozenal and niftimal text
//! - **Pluggable transcendental backend** for `ln`, `exp` and fractional powers
//!
//! ## Example
//!
//! ```rust
//! use sezimal::prelude::*;
//!
//! let five: Sezimal = "5".parse()?;
//! assert_eq!((&five + &Sezimal::one()).to_string(), "10");
//! assert_eq!(Sezimal::new("1")? / Sezimal::new("2")?, Sezimal::new("0.3")?);
//!
//! // Rationals stay exact where the general value would round
//! let third: SezimalFraction = "1/3".parse()?;
//! assert_eq!(&third * &SezimalInteger::from(3i64), Sezimal::one());
//!
//! // Bridges
//! assert_eq!(Sezimal::new("14")?.to_dozenal(), "A");
//! assert_eq!(Sezimal::from_decimal("0.5".parse()?).to_string(), "0.3");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::config::{current, install, PrecisionContext};
    pub use crate::domain::constants;
    pub use crate::domain::{Sezimal, SezimalFraction, SezimalInput, SezimalInteger, SezimalValue};
    pub use crate::interfaces::{BigDecimalBackend, DecimalBackend, LoggingBackend, RustDecimalBackend};
    pub use crate::numeric::{NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn sez(text: &str) -> Sezimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_concrete_vectors() {
        assert_eq!((sez("5") + sez("1")).to_string(), "10");
        // Carry cascades through every 5
        assert_eq!((sez("55") + sez("1")).to_string(), "100");
        assert_eq!((sez("2") * sez("3")).to_string(), "10");
        assert_eq!(sez("1") / sez("2"), sez("0.3"));
    }

    #[test]
    fn test_rounding_branches() {
        assert_eq!(sez("1.23").round(0).to_string(), "1");
        // Next digit 5
        assert_eq!(sez("1.25").round(1).to_string(), "1.3");
        // Next digit 3, non-zero tail
        assert_eq!(sez("1.231").round(1).to_string(), "1.3");
        // Next digit 3, zero tail, even kept digit
        assert_eq!(sez("1.230").round(1).to_string(), "1.2");
        // Next digit 3, zero tail, odd kept digit
        assert_eq!(sez("1.13").round(1).to_string(), "1.2");
        assert_eq!(sez("-1.25").round(1).to_string(), "-1.3");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(sez("1").checked_div(&sez("0")), Err(NumericError::DivisionByZero));
        assert_eq!(sez("1").reciprocal().err(), None);
        assert_eq!(sez("0").reciprocal(), Err(NumericError::DivisionByZero));
        assert_eq!(sez("1").checked_rem(&sez("0")), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_fraction_exactness() {
        let third: SezimalFraction = "1/3".parse().unwrap();
        let product = &third * &SezimalInteger::from(3i64);
        assert_eq!(product, Sezimal::one());

        let reduced: SezimalFraction = "4/2".parse().unwrap();
        assert_eq!(reduced.numerator(), &SezimalInteger::from(2i64));
        assert_eq!(reduced.denominator(), &SezimalInteger::one());
    }

    #[test]
    fn test_mixed_value_flow() {
        let price = Sezimal::new(SezimalInput::dozenal("1B.6")).unwrap();
        assert_eq!(price.to_string(), "35.3");

        let count = SezimalInteger::new("4").unwrap();
        let total = &price * count.as_sezimal();
        assert_eq!(total.to_string(), "234.0");
        assert_eq!(total.to_native(), Ok(94));

        // Native six is 10₆
        let share = SezimalFraction::new(SezimalInput::ratio(total.clone(), 6i64)).unwrap();
        assert_eq!(share.to_string(), "234/10");
        assert_eq!(share.approx().clone(), sez("23.4"));

        let share = SezimalFraction::new(SezimalInput::ratio(total, sez("10"))).unwrap();
        assert_eq!(share.approx().clone(), sez("23.4"));
    }

    #[test]
    fn test_errors_propagate_from_parsing() {
        assert!(matches!(
            Sezimal::new("12.3.4"),
            Err(NumericError::Validation { .. })
        ));
        assert!(matches!(Sezimal::new("16"), Err(NumericError::Validation { .. })));
        assert!(matches!(
            SezimalInteger::new("1.1"),
            Err(NumericError::InvalidInteger(_))
        ));
    }
}
