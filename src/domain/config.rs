// ============================================================================
// Precision Configuration
// Working-precision context for division, rounding and the decimal bridge
// ============================================================================

use crate::numeral;
use crate::numeric::{NumericError, NumericResult};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_precision`
pub const MAX_SUPPORTED_PRECISION: usize = 1_000;

/// Immutable numeric context shared by every engine entry point.
///
/// `max_precision` bounds how many fractional sezimal digits division,
/// multiplication finalization, rounding and the decimal bridge may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionContext {
    /// Maximum fractional digits kept after division or multiplication
    pub max_precision: usize,
}

impl PrecisionContext {
    /// Twenty sezimal digits, about 15.5 decimal digits.
    pub const DEFAULT_MAX_PRECISION: usize = 20;

    /// Create a context with the default maximum precision
    pub const fn new() -> Self {
        Self {
            max_precision: Self::DEFAULT_MAX_PRECISION,
        }
    }

    /// Builder method: Set maximum precision
    pub const fn with_max_precision(mut self, max_precision: usize) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Number of quotient digits produced when computing a reciprocal.
    #[inline]
    pub fn division_limit(&self) -> usize {
        self.max_precision * 2
    }

    /// Decimal places the decimal bridge and the transcendental backends work
    /// to, enough to resolve every sezimal digit up to `max_precision`.
    #[inline]
    pub fn decimal_scale(&self) -> i64 {
        numeral::scale_for(self.max_precision)
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_precision == 0 {
            return Err(NumericError::InvalidContext(
                "maximum precision must be at least one digit".to_string(),
            ));
        }
        if self.max_precision > MAX_SUPPORTED_PRECISION {
            return Err(NumericError::InvalidContext(format!(
                "maximum precision cannot exceed {MAX_SUPPORTED_PRECISION} digits"
            )));
        }
        Ok(())
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Process-wide Context
// ============================================================================

static PROCESS_CONTEXT: OnceLock<PrecisionContext> = OnceLock::new();

/// Installs the process-wide context. Must happen before the first
/// arithmetic operation that reads it; it cannot be replaced afterwards.
///
/// # Errors
/// `InvalidContext` if the context fails validation or a context is already
/// in place (including the default one, once any operation has used it).
pub fn install(context: PrecisionContext) -> NumericResult<()> {
    context.validate()?;
    PROCESS_CONTEXT.set(context).map_err(|_| {
        NumericError::InvalidContext("a process-wide context is already installed".to_string())
    })?;
    tracing::debug!(
        max_precision = context.max_precision,
        "installed sezimal precision context"
    );
    Ok(())
}

/// The process-wide context, falling back to (and freezing) the default.
pub fn current() -> &'static PrecisionContext {
    PROCESS_CONTEXT.get_or_init(PrecisionContext::default)
}
