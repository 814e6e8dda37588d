//! Exact integer arithmetic used throughout simplification.
//!
//! Every function here is total: operations that would overflow an [`i64`] return [`None`]
//! instead of panicking, and the simplifier leaves the corresponding node unevaluated.

use std::collections::BTreeMap;

/// Returns the greatest common divisor of the absolute values of `a` and `b`.
///
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the least common multiple of the absolute values of `a` and `b`, or [`None`] if it
/// does not fit in an [`i64`].
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd(a, b);
    let l = (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())?;
    i64::try_from(l).ok()
}

/// Raises `base` to the given non-negative power, or returns [`None`] if the exponent is negative
/// or the result overflows.
pub fn checked_pow(base: i64, exp: i64) -> Option<i64> {
    match (base, exp) {
        (_, exp) if exp < 0 => None,
        (0 | 1, 0) => Some(1),
        (0 | 1, _) => Some(base),
        (-1, exp) => Some(if exp % 2 == 0 { 1 } else { -1 }),
        (base, exp) => base.checked_pow(u32::try_from(exp).ok()?),
    }
}

/// Returns the exact `k`-th root of `n`, if it is an integer.
///
/// Negative numbers only have odd roots.
pub fn integer_root(n: i64, k: u32) -> Option<i64> {
    if k == 0 {
        return None;
    }
    if n < 0 {
        if k % 2 == 0 {
            return None;
        }
        return integer_root(n.checked_neg()?, k).map(|r| -r);
    }
    if n < 2 || k == 1 {
        return Some(n);
    }

    // floating point gets close; correct the estimate exactly
    let estimate = (n as f64).powf(1.0 / f64::from(k)).round() as i64;
    (estimate.saturating_sub(1)..=estimate.saturating_add(1))
        .filter(|r| *r >= 0)
        .find(|&r| r.checked_pow(k) == Some(n))
}

/// Decomposes `n` into `base ^ exponent` with the largest possible exponent greater than one.
///
/// Returns [`None`] if `n` is not a perfect power, and for `-1`, `0` and `1`, which are perfect
/// powers of every exponent.
///
/// ```
/// use exact_compute::primitive::perfect_power;
///
/// assert_eq!(perfect_power(64), Some((2, 6)));
/// assert_eq!(perfect_power(-27), Some((-3, 3)));
/// assert_eq!(perfect_power(12), None);
/// ```
pub fn perfect_power(n: i64) -> Option<(i64, u32)> {
    if (-1..=1).contains(&n) {
        return None;
    }

    (2..64).rev()
        .find_map(|k| integer_root(n, k).map(|base| (base, k)))
}

/// Returns the prime factorization of `n`, mapping each prime factor to its multiplicity.
///
/// The factorization of `0` and `1` is empty.
pub fn prime_factorization(mut n: u64) -> BTreeMap<u64, u32> {
    let mut factors = BTreeMap::new();
    if n == 0 {
        return factors;
    }

    let mut i = 2u64;
    while i.saturating_mul(i) <= n {
        while n % i == 0 {
            *factors.entry(i).or_insert(0) += 1;
            n /= i;
        }
        i += 1;
    }
    if n > 1 {
        *factors.entry(n).or_insert(0) += 1;
    }

    factors
}

/// Reduces the fraction `numerator / denominator` to lowest terms, with a positive denominator.
///
/// Returns [`None`] if the denominator is zero or the reduced fraction does not fit in an [`i64`].
pub fn reduce_fraction(numerator: i64, denominator: i64) -> Option<(i64, i64)> {
    if denominator == 0 {
        return None;
    }

    let g = i64::try_from(gcd(numerator, denominator)).ok()?;
    let (mut numerator, mut denominator) = (numerator / g, denominator / g);
    if denominator < 0 {
        numerator = numerator.checked_neg()?;
        denominator = denominator.checked_neg()?;
    }
    Some((numerator, denominator))
}
