// ============================================================================
// Numeral Module
// Text parsing and conversion to and from other number bases
// ============================================================================

pub mod decimal;
pub mod normalizer;
pub mod radix;

pub use decimal::{from_decimal, from_rust_decimal, quotient, scale_for, to_decimal, to_rust_decimal};
pub use normalizer::{is_ratio, parse_numeral, split_ratio, ParsedNumeral};
pub use radix::{from_dozenal, from_niftimal, to_dozenal, to_niftimal};
