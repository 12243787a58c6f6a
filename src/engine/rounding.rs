// ============================================================================
// Rounding
// Half-unit rounding, truncation and the multiply/divide tail fix-up
// ============================================================================

use super::addition::add;
use super::magnitude::Magnitude;
use crate::domain::config::PrecisionContext;

/// Fractional tail that triggers the post-multiplication fix-up
const FIXUP_TAIL: [u8; 4] = [5, 5, 5, 5];

/// Rounds a magnitude to `precision` fractional digits, away from zero on
/// the upper half.
///
/// With `next` the first discarded digit:
/// - 4 or 5 round up
/// - 3 (exactly half when nothing follows) rounds up if any later digit is
///   non-zero, or if the last kept digit is odd
/// - 0, 1 or 2 truncate
///
/// Values already at or below `precision` digits come back unchanged.
pub fn round(value: &Magnitude, precision: usize) -> Magnitude {
    if value.precision() <= precision {
        return value.clone();
    }

    let fraction = value.fraction();
    let next = fraction[precision];
    let tail = &fraction[precision + 1..];
    let last = if precision == 0 {
        value.integer().last().copied().unwrap_or(0)
    } else {
        fraction[precision - 1]
    };

    let round_up = match next {
        4 | 5 => true,
        3 => tail.iter().any(|&d| d != 0) || last % 2 == 1,
        _ => false,
    };

    let truncated = value.truncate(precision);
    if round_up {
        add(&truncated, &Magnitude::unit(precision))
    } else {
        truncated
    }
}

/// Cuts the fraction after `precision` digits without adjustment.
#[inline]
pub fn truncate(value: &Magnitude, precision: usize) -> Magnitude {
    value.truncate(precision)
}

/// Post-processing applied to every multiplication and division result.
///
/// The value is rounded to the context's maximum precision; if it then sits
/// at exactly that precision and its digits end in `5555`, the last digit is
/// bumped by one unit.
// NOTE: the trigger is a literal digit-suffix match, not a derived numeric
// condition such as distance to a half unit.
pub fn finalize(value: &Magnitude, ctx: &PrecisionContext) -> Magnitude {
    let rounded = round(value, ctx.max_precision);
    let precision = rounded.precision();

    if precision == ctx.max_precision && rounded.fraction().ends_with(&FIXUP_TAIL) {
        tracing::trace!(%rounded, "applying 5555 tail fix-up");
        return add(&rounded, &Magnitude::unit(precision));
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::magnitude::mag;

    #[test]
    fn test_round_unchanged_when_short() {
        assert_eq!(round(&mag("1.23"), 2), mag("1.23"));
        assert_eq!(round(&mag("1.23"), 5), mag("1.23"));
    }

    #[test]
    fn test_round_next_digit_low_truncates() {
        assert_eq!(round(&mag("1.23"), 0), mag("1"));
        assert_eq!(round(&mag("1.2155"), 1), mag("1.2"));
        assert_eq!(round(&mag("4.50"), 1), mag("4.5"));
    }

    #[test]
    fn test_round_next_digit_high_rounds_up() {
        assert_eq!(round(&mag("1.5"), 0), mag("2"));
        assert_eq!(round(&mag("1.24"), 1), mag("1.3"));
        assert_eq!(round(&mag("5.55"), 1), mag("10.0"));
    }

    #[test]
    fn test_round_next_digit_three() {
        // Non-zero tail beyond the half digit
        assert_eq!(round(&mag("2.301"), 0), mag("3"));
        // Exact half, even kept digit
        assert_eq!(round(&mag("2.300"), 0), mag("2"));
        assert_eq!(round(&mag("0.43"), 1), mag("0.4"));
        // Exact half, odd kept digit
        assert_eq!(round(&mag("1.3"), 0), mag("2"));
        assert_eq!(round(&mag("0.53"), 1), mag("1.0"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(&mag("1.555"), 1), mag("1.5"));
        assert_eq!(truncate(&mag("1.555"), 0), mag("1"));
    }

    #[test]
    fn test_finalize_rounds_to_max_precision() {
        let ctx = PrecisionContext::new().with_max_precision(4);
        assert_eq!(finalize(&mag("0.123412"), &ctx), mag("0.1234"));
        assert_eq!(finalize(&mag("0.12344"), &ctx), mag("0.1235"));
        assert_eq!(finalize(&mag("0.12"), &ctx), mag("0.12"));
    }

    #[test]
    fn test_finalize_tail_fixup() {
        let ctx = PrecisionContext::new().with_max_precision(6);
        assert_eq!(finalize(&mag("0.1255551"), &ctx), mag("0.130000"));
        assert_eq!(finalize(&mag("0.125555"), &ctx), mag("0.130000"));
    }

    #[test]
    fn test_finalize_ignores_short_tails() {
        let ctx = PrecisionContext::new().with_max_precision(6);
        // Fewer than max digits: exact result, left alone
        assert_eq!(finalize(&mag("0.5555"), &ctx), mag("0.5555"));
        assert_eq!(finalize(&mag("5555"), &ctx), mag("5555"));
    }
}
