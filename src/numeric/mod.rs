// ============================================================================
// Numeric Module
// Leaf primitives shared by every layer of the sezimal engine
// ============================================================================
//
// This module provides:
// - Digit tables: single-digit addition, subtraction, borrow and multiplication
// - Reciprocal table: precomputed 1/n expansions for small divisors
// - NumericError: error type for parsing, conversion and arithmetic
//
// Design principles:
// - Tables are plain `const` data, no runtime initialization
// - All fallible operations return NumericResult (no panics)

mod errors;
pub mod reciprocal;
pub mod tables;

pub use errors::{NumericError, NumericResult};
pub use reciprocal::Reciprocal;
