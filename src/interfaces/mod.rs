// ============================================================================
// Interfaces Module
// Contains the trait seams between sezimal values and external math
// ============================================================================

mod decimal_backend;

pub use decimal_backend::{BigDecimalBackend, DecimalBackend, LoggingBackend, RustDecimalBackend};
