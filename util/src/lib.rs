//! Various simple integer utilities.

#![no_std]

/// Computes `x mod n` with the mathematical convention, so the result always lies in `[0, n)`.
///
/// Rust's `%` takes the sign of the dividend, e.g. `-1 % 5 == -1`. All index wraparound in the
/// workspace goes through this function instead.
///
/// # Panics
/// Panics if `n` is zero or does not fit in an `i64`.
#[must_use]
#[inline]
pub const fn modulo(x: i64, n: u64) -> u64 {
    assert!(n != 0 && n <= i64::MAX as u64, "modulus must be in [1, i64::MAX]");
    x.rem_euclid(n as i64) as u64
}

/// Returns the `n`-th triangular number, `n (n + 1) / 2`.
#[must_use]
#[inline]
pub const fn triangular_number(n: u64) -> u64 {
    // One of `n`, `n + 1` is even, so halve that one first to delay overflow.
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}
