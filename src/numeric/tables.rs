// ============================================================================
// Digit Tables
// Single-digit lookup tables for base-6 arithmetic
// ============================================================================
//
// Every entry is indexed by the two operand digits (0..=5). Results that do
// not fit a single digit are stored as `(carry, digit)` pairs, i.e. the
// two-digit sezimal result "14" is stored as `(1, 4)`.

/// The radix every table is built for
pub const RADIX: u8 = 6;

/// Largest single sezimal digit
pub const MAX_DIGIT: u8 = RADIX - 1;

/// `ADDITION[a][b] = (carry, digit)` with `a + b = carry × 10₆ + digit`
pub const ADDITION: [[(u8, u8); 6]; 6] = [
    [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)],
    [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0)],
    [(0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 1)],
    [(0, 3), (0, 4), (0, 5), (1, 0), (1, 1), (1, 2)],
    [(0, 4), (0, 5), (1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 5), (1, 0), (1, 1), (1, 2), (1, 3), (1, 4)],
];

/// `SUBTRACTION[a][b] = (borrow, digit)`; when `a < b` the minuend borrows one
/// unit from the next position, so `digit = 10₆ + a - b`
pub const SUBTRACTION: [[(u8, u8); 6]; 6] = [
    [(0, 0), (1, 5), (1, 4), (1, 3), (1, 2), (1, 1)],
    [(0, 1), (0, 0), (1, 5), (1, 4), (1, 3), (1, 2)],
    [(0, 2), (0, 1), (0, 0), (1, 5), (1, 4), (1, 3)],
    [(0, 3), (0, 2), (0, 1), (0, 0), (1, 5), (1, 4)],
    [(0, 4), (0, 3), (0, 2), (0, 1), (0, 0), (1, 5)],
    [(0, 5), (0, 4), (0, 3), (0, 2), (0, 1), (0, 0)],
];

/// Digit left behind after lending one unit to the position on its right.
///
/// A zero cannot absorb the borrow: it becomes 5 and passes the borrow on.
pub const BORROWED: [u8; 6] = [5, 0, 1, 2, 3, 4];

/// `MULTIPLICATION[a][b] = (carry, digit)` with `a × b = carry × 10₆ + digit`
pub const MULTIPLICATION: [[(u8, u8); 6]; 6] = [
    [(0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)],
    [(0, 0), (0, 2), (0, 4), (1, 0), (1, 2), (1, 4)],
    [(0, 0), (0, 3), (1, 0), (1, 3), (2, 0), (2, 3)],
    [(0, 0), (0, 4), (1, 2), (2, 0), (2, 4), (3, 2)],
    [(0, 0), (0, 5), (1, 4), (2, 3), (3, 2), (4, 1)],
];

/// Adds two digits and an incoming carry, returning `(carry, digit)`.
#[inline]
pub fn add_digits(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let (first_carry, partial) = ADDITION[a as usize][b as usize];
    let (second_carry, digit) = ADDITION[partial as usize][carry as usize];
    // a + b + 1 never exceeds "15", so at most one of the two lookups carries
    (first_carry + second_carry, digit)
}

/// Multiplies two digits and adds an incoming carry digit, returning `(carry, digit)`.
#[inline]
pub fn multiply_digits(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let (high, low) = MULTIPLICATION[a as usize][b as usize];
    let (low_carry, digit) = ADDITION[low as usize][carry as usize];
    // 5 × 5 + 5 = "50", so the high digit plus the carry stays a single digit
    (ADDITION[high as usize][low_carry as usize].1, digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_table_matches_native() {
        for a in 0..RADIX {
            for b in 0..RADIX {
                let (carry, digit) = ADDITION[a as usize][b as usize];
                assert_eq!(carry * RADIX + digit, a + b, "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_subtraction_table_matches_native() {
        for a in 0..RADIX {
            for b in 0..RADIX {
                let (borrow, digit) = SUBTRACTION[a as usize][b as usize];
                assert_eq!(
                    i16::from(digit) - i16::from(borrow) * i16::from(RADIX),
                    i16::from(a) - i16::from(b),
                    "{a} - {b}"
                );
            }
        }
    }

    #[test]
    fn test_multiplication_table_matches_native() {
        for a in 0..RADIX {
            for b in 0..RADIX {
                let (carry, digit) = MULTIPLICATION[a as usize][b as usize];
                assert_eq!(carry * RADIX + digit, a * b, "{a} × {b}");
            }
        }
    }

    #[test]
    fn test_borrowed() {
        assert_eq!(BORROWED[0], MAX_DIGIT);
        for d in 1..RADIX {
            assert_eq!(BORROWED[d as usize], d - 1);
        }
    }

    #[test]
    fn test_add_digits_with_carry() {
        assert_eq!(add_digits(5, 5, 1), (1, 5));
        assert_eq!(add_digits(5, 0, 1), (1, 0));
        assert_eq!(add_digits(2, 2, 0), (0, 4));
    }

    #[test]
    fn test_multiply_digits_with_carry() {
        assert_eq!(multiply_digits(5, 5, 5), (5, 0));
        assert_eq!(multiply_digits(2, 3, 0), (1, 0));
        assert_eq!(multiply_digits(0, 4, 3), (0, 3));
    }
}
