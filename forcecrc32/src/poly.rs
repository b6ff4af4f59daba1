//! Polynomial arithmetic over GF(2) modulo the CRC-32 generator
//!
//! Polynomials are stored as unsigned integers: bit *i* is the coefficient
//! of x^i, addition is XOR. All modular operations reduce against the fixed
//! generator [`POLYNOMIAL`]; reduced values have degree at most 31, so
//! intermediate products fit comfortably in a `u64`.

use crate::error::{Error, Result};

/// The CRC-32 generator polynomial, including the implicit degree-32 bit.
///
/// This is a domain constant shared with the bit-reflected engine in
/// [`crate::crc32`]. Do not modify.
pub const POLYNOMIAL: u64 = 0x1_04C1_1DB7;

/// Multiplies polynomial `x` by polynomial `y` modulo the generator.
///
/// Inputs are expected to be reduced (degree ≤ 31); the result is reduced.
pub fn multiply_mod(mut x: u64, mut y: u64) -> u64 {
    // Russian peasant multiplication with interleaved reduction
    let mut z = 0u64;
    while y != 0 {
        if y & 1 != 0 {
            z ^= x;
        }
        y >>= 1;
        x <<= 1;
        if (x >> 32) & 1 != 0 {
            x ^= POLYNOMIAL;
        }
    }
    z
}

/// Raises polynomial `x` to the natural-number power `n` modulo the
/// generator. `pow_mod(x, 0)` is the multiplicative identity 1.
pub fn pow_mod(mut x: u64, mut n: u64) -> u64 {
    // Exponentiation by squaring
    let mut z = 1u64;
    while n != 0 {
        if n & 1 != 0 {
            z = multiply_mod(z, x);
        }
        x = multiply_mod(x, x);
        n >>= 1;
    }
    z
}

/// Returns the degree of polynomial `x`, or -1 for the zero polynomial.
pub fn degree(x: u64) -> i32 {
    63 - x.leading_zeros() as i32
}

/// Divides polynomial `x` by polynomial `y`, returning `(quotient,
/// remainder)`. Fails with [`Error::DivisionByZero`] when `y` is zero.
pub fn div_rem(x: u64, y: u64) -> Result<(u64, u64)> {
    if y == 0 {
        return Err(Error::DivisionByZero);
    }
    if x == 0 {
        return Ok((0, 0));
    }

    let ydeg = degree(y);
    let mut rem = x;
    let mut quot = 0u64;
    let mut i = degree(x) - ydeg;
    while i >= 0 {
        if (rem >> (i + ydeg)) & 1 != 0 {
            rem ^= y << i;
            quot |= 1u64 << i;
        }
        i -= 1;
    }
    Ok((quot, rem))
}

/// Returns the multiplicative inverse of polynomial `x` modulo the
/// generator, via the extended Euclidean algorithm over GF(2)[x].
///
/// Fails with [`Error::NoInverse`] when `x` and the generator are not
/// coprime. The standard CRC-32 generator is primitive, so every nonzero
/// reduced polynomial is invertible; the check guards against a corrupted
/// generator constant.
pub fn reciprocal_mod(x: u64) -> Result<u64> {
    // Simplified extended Euclidean algorithm: (u, v) walk down the
    // remainder chain while (a, b) accumulate the Bezout coefficient of x.
    let mut u = POLYNOMIAL;
    let mut v = x;
    let mut a = 0u64;
    let mut b = 1u64;
    while v != 0 {
        let (q, r) = div_rem(u, v)?;
        let c = a ^ multiply_mod(q, b);
        u = v;
        v = r;
        a = b;
        b = c;
    }
    if u != 1 {
        return Err(Error::NoInverse(x));
    }
    Ok(a)
}
