//! Primality testing, prime sums and factorization.
//!
//! The `_ineff` and `_naive` functions compute the same results as their counterparts while
//! doing far more work. They exist to be timed against them.

use std::hint::black_box;

/// Returns `true` if `n` is prime, by trial division with every candidate below `n`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|i| n % i != 0)
}

/// Same as [`is_prime`] but burns `O(n * 10_000)` pointless multiplications first and spins
/// between every division.
pub fn is_prime_ineff(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    for j in 1..n {
        for k in 1..10_000u64 {
            black_box(k.wrapping_mul(j));
        }
    }

    for i in 2..n {
        for spin in 0..1_000u32 {
            black_box(spin);
        }
        if n % i == 0 {
            return false;
        }
    }

    true
}

/// Sum of all primes strictly below `n`, using a sieve of Eratosthenes.
///
/// # Examples
///
/// ```
/// use algobench::primes::sum_primes;
///
/// assert_eq!(sum_primes(10), 2 + 3 + 5 + 7);
/// assert_eq!(sum_primes(2), 0);
/// ```
pub fn sum_primes(n: usize) -> u64 {
    if n <= 2 {
        return 0;
    }

    let mut sieve = vec![true; n];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i < n {
        if sieve[i] {
            for multiple in (i * i..n).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    sieve
        .iter()
        .enumerate()
        .filter(|(_, &prime)| prime)
        .map(|(i, _)| i as u64)
        .sum()
}

/// Prime factors of `n` in ascending order, repeated by multiplicity. `0` and `1` have none.
///
/// Divides out each candidate up to `sqrt(n)`; whatever remains above 1 is itself prime.
///
/// # Examples
///
/// ```
/// use algobench::primes::prime_factors;
///
/// assert_eq!(prime_factors(840), vec![2, 2, 2, 3, 5, 7]);
/// assert_eq!(prime_factors(97), vec![97]);
/// ```
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    let mut d = 2;
    while d <= n / d {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }

    factors
}

/// Same as [`prime_factors`], but restarts the divisor scan at 2 after every factor found and
/// scans all the way to `n`.
pub fn prime_factors_naive(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    while n > 1 {
        if let Some(d) = (2..=n).find(|d| n % d == 0) {
            factors.push(d);
            n /= d;
        }
    }

    factors
}
