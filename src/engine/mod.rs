// ============================================================================
// Engine Module
// Digit-level arithmetic over unsigned base-6 magnitudes
// ============================================================================
//
// Every routine here works on `Magnitude` values and the digit tables from
// `crate::numeric`. Signs, value types and the decimal bridge live in
// `crate::domain`; nothing in this module knows about them.

pub mod addition;
pub mod division;
pub mod magnitude;
pub mod multiplication;
pub mod rounding;

pub use addition::{add, signed_add, signed_subtract, subtract};
pub use division::{divide, divide_integral, reciprocal};
pub use magnitude::{Digits, Magnitude, Sign};
pub use multiplication::{multiply, power};
pub use rounding::{finalize, round, truncate};
