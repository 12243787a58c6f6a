// ============================================================================
// Magnitude
// Unsigned base-6 digit container shared by every engine routine
// ============================================================================

use crate::numeric::tables::{MAX_DIGIT, RADIX};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Digit buffer, most significant digit first unless stated otherwise.
pub type Digits = SmallVec<[u8; 32]>;

/// Sign of a sezimal value. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The opposite sign
    #[inline]
    pub fn negate(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient of two values with these signs
    #[inline]
    pub fn combine(self, other: Sign) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// +1 or -1
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// Absolute value of a sezimal number as integer and fractional digit runs.
///
/// Invariants:
/// - every digit is in `0..=5`
/// - `integer` is never empty and has no leading zero unless it is exactly `[0]`
/// - `fraction.len()` is the precision; trailing zeros are kept
///
/// The derived `PartialEq` is structural (`1.0 != 1`); use [`Magnitude::cmp_value`]
/// for numeric comparison.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    integer: Digits,
    fraction: Digits,
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl Magnitude {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a magnitude from most-significant-first digit runs, stripping
    /// superfluous leading zeros from the integer part.
    pub fn new<I, F>(integer: I, fraction: F) -> Self
    where
        I: IntoIterator<Item = u8>,
        F: IntoIterator<Item = u8>,
    {
        let mut integer: Digits = integer.into_iter().skip_while(|&d| d == 0).collect();
        if integer.is_empty() {
            integer.push(0);
        }
        let fraction: Digits = fraction.into_iter().collect();
        debug_assert!(integer.iter().chain(fraction.iter()).all(|&d| d <= MAX_DIGIT));
        Self { integer, fraction }
    }

    /// The integer zero
    pub fn zero() -> Self {
        Self::digit(0)
    }

    /// The integer one
    pub fn one() -> Self {
        Self::digit(1)
    }

    /// A single-digit integer
    pub fn digit(d: u8) -> Self {
        debug_assert!(d <= MAX_DIGIT);
        let mut integer = Digits::new();
        integer.push(d);
        Self {
            integer,
            fraction: Digits::new(),
        }
    }

    /// One unit in the last place of a number with `precision` fractional
    /// digits, i.e. `10₆^-precision`.
    pub fn unit(precision: usize) -> Self {
        if precision == 0 {
            return Self::one();
        }
        let mut fraction: Digits = SmallVec::from_elem(0, precision);
        fraction[precision - 1] = 1;
        Self::new([0], fraction)
    }

    /// Converts a native unsigned integer into base-6 digits.
    pub fn from_u128(mut value: u128) -> Self {
        let mut lsb = Digits::new();
        loop {
            lsb.push((value % u128::from(RADIX)) as u8);
            value /= u128::from(RADIX);
            if value == 0 {
                break;
            }
        }
        Self::from_lsb(&lsb, 0)
    }

    /// Builds a magnitude from least-significant-first digits, the lowest
    /// `precision` of which are fractional.
    pub fn from_lsb(lsb: &[u8], precision: usize) -> Self {
        let split = precision.min(lsb.len());
        // Missing fractional digits sit right after the point
        let fraction = std::iter::repeat(0)
            .take(precision - split)
            .chain(lsb[..split].iter().rev().copied());
        Self::new(lsb[split..].iter().rev().copied(), fraction)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer digits, most significant first
    #[inline]
    pub fn integer(&self) -> &[u8] {
        &self.integer
    }

    /// Fractional digits, most significant first
    #[inline]
    pub fn fraction(&self) -> &[u8] {
        &self.fraction
    }

    /// Number of fractional digits, trailing zeros included
    #[inline]
    pub fn precision(&self) -> usize {
        self.fraction.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer.as_slice() == [0] && self.fraction.iter().all(|&d| d == 0)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.integer.as_slice() == [1] && self.fraction.iter().all(|&d| d == 0)
    }

    /// Whether any fractional digit is non-zero
    #[inline]
    pub fn has_fraction(&self) -> bool {
        self.fraction.iter().any(|&d| d != 0)
    }

    /// Integer part as a native integer, `None` on overflow.
    pub fn to_u128(&self) -> Option<u128> {
        self.integer.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(u128::from(RADIX))?.checked_add(u128::from(d))
        })
    }

    /// All digits least significant first, fraction zero-padded to `precision`.
    pub fn to_lsb(&self, precision: usize) -> Digits {
        debug_assert!(precision >= self.precision());
        let mut lsb: Digits = SmallVec::from_elem(0, precision - self.precision());
        lsb.extend(self.fraction.iter().rev().copied());
        lsb.extend(self.integer.iter().rev().copied());
        lsb
    }

    // ========================================================================
    // Derived magnitudes
    // ========================================================================

    /// Cuts the fraction after `precision` digits, without rounding.
    pub fn truncate(&self, precision: usize) -> Self {
        if self.precision() <= precision {
            return self.clone();
        }
        Self {
            integer: self.integer.clone(),
            fraction: self.fraction[..precision].iter().copied().collect(),
        }
    }

    /// Integer part only
    pub fn integral(&self) -> Self {
        self.truncate(0)
    }

    /// Drops trailing fractional zeros
    pub fn trimmed(&self) -> Self {
        let keep = self
            .fraction
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |last| last + 1);
        self.truncate(keep)
    }

    /// Pads the fraction with zeros up to `precision` digits.
    pub fn pad_to(&self, precision: usize) -> Self {
        let mut padded = self.clone();
        if padded.fraction.len() < precision {
            padded.fraction.resize(precision, 0);
        }
        padded
    }

    /// Moves every fractional digit into the integer part, i.e. multiplies by
    /// `10₆^precision`.
    pub fn scaled_to_integer(&self) -> Self {
        Self::new(
            self.integer.iter().chain(self.fraction.iter()).copied(),
            std::iter::empty(),
        )
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison; trailing fractional zeros are irrelevant.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.integer
            .len()
            .cmp(&other.integer.len())
            .then_with(|| self.integer.cmp(&other.integer))
            .then_with(|| {
                let width = self.precision().max(other.precision());
                let ours = self.fraction.iter().copied().chain(std::iter::repeat(0));
                let theirs = other.fraction.iter().copied().chain(std::iter::repeat(0));
                ours.take(width).cmp(theirs.take(width))
            })
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.integer {
            write!(f, "{d}")?;
        }
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for d in &self.fraction {
                write!(f, "{d}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({self})")
    }
}

#[cfg(test)]
pub(crate) fn mag(text: &str) -> Magnitude {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    Magnitude::new(
        integer.bytes().map(|b| b - b'0'),
        fraction.bytes().map(|b| b - b'0'),
    )
}
