//! # Digit Reduction
//!
//! Collapses a number to a single digit by repeatedly summing its decimal
//! digits, stopping early at a master number.
//!
//! ```text
//!   49 ──► 4+9 = 13 ──► 1+3 = 4          (single digit)
//!   29 ──► 2+9 = 11                      (master, halts)
//!   38 ──► 3+8 = 11                      (master, halts)
//!  299 ──► 2+9+9 = 20 ──► 2              (20 is not a master)
//! ```

/// The master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Returns true if `n` is 11, 22 or 33.
#[inline]
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sums the base-10 digits of `n` once.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` to a value in {0..9, 11, 22, 33}.
///
/// Each iteration checks both exit conditions, so an intermediate sum of
/// 11, 22 or 33 is returned as-is. Inputs already ≤ 9 or already master
/// numbers come back unchanged. Zero is only produced by zero.
///
/// ```rust
/// use numero_core::reduction::reduce;
///
/// assert_eq!(reduce(10), 1);
/// assert_eq!(reduce(29), 11);
/// assert_eq!(reduce(49), 4);
/// ```
pub fn reduce(n: u32) -> u32 {
    let mut n = n;
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}
