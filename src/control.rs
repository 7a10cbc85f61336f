//! Arithmetic over single and nested loops.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Sum of the integers `0..=n`.
///
/// Fails with [`Error::NegativeInput`] if `n` is negative and with [`Error::Overflow`] if the
/// sum doesn't fit in an `i64`.
pub fn sum_range(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeInput { name: "n", value: n });
    }
    let n = i128::from(n);
    i64::try_from(n * (n + 1) / 2).map_err(|_| Error::Overflow { op: "sum_range" })
}

/// Sum of the integers `0..n`, collected into a `Vec` first and then added up.
pub fn sum_range_naive(n: i64) -> i64 {
    let values: Vec<i64> = (0..n).collect();
    values.iter().sum()
}

/// Largest value in `v`.
///
/// Fails with [`Error::EmptyInput`] if `v` is empty.
pub fn max_list(v: &[i64]) -> Result<i64> {
    v.iter()
        .copied()
        .max()
        .ok_or(Error::EmptyInput("max_list"))
}

/// Sum of `i % m` for every `i` in `0..=n`.
///
/// Fails with [`Error::ZeroModulus`] if `m` is zero.
pub fn sum_modulus(n: u64, m: u64) -> Result<u64> {
    if m == 0 {
        return Err(Error::ZeroModulus);
    }
    Ok((0..=n).map(|i| i % m).sum())
}

/// Sum of the squares of `0..n`, using the closed form `(n - 1) n (2n - 1) / 6`.
///
/// Fails with [`Error::Overflow`] if the sum doesn't fit in a `u64`.
pub fn sum_square(n: u64) -> Result<u64> {
    if n == 0 {
        return Ok(0);
    }
    // The product needs up to 194 bits, so divide out 2 and 3 before it is formed.
    let (mut a, mut b, mut c) = (u128::from(n - 1), u128::from(n), 2 * u128::from(n) - 1);
    if a % 2 == 0 {
        a /= 2;
    } else {
        b /= 2;
    }
    if a % 3 == 0 {
        a /= 3;
    } else if b % 3 == 0 {
        b /= 3;
    } else {
        c /= 3;
    }
    a.checked_mul(b)
        .and_then(|ab| ab.checked_mul(c))
        .and_then(|sum| u64::try_from(sum).ok())
        .ok_or(Error::Overflow { op: "sum_square" })
}

/// Sum over `i` in `0..n` of the triangle `0 + 1 + .. + i`, with two nested loops.
pub fn sum_triangle(n: u64) -> u64 {
    let mut sum = 0;
    for i in 0..n {
        for j in 0..=i {
            sum += j;
        }
    }
    sum
}

/// Number of distinct values that occur exactly twice in `v`.
///
/// # Examples
///
/// ```
/// use algobench::control::count_pairs;
///
/// // 1 and 3 appear twice, 2 appears three times.
/// assert_eq!(count_pairs(&[1, 1, 2, 2, 2, 3, 3, 4]), 2);
/// ```
pub fn count_pairs(v: &[i64]) -> usize {
    let mut counts = HashMap::new();
    for &x in v {
        *counts.entry(x).or_insert(0usize) += 1;
    }
    counts.values().filter(|&&count| count == 2).count()
}

/// Number of positions at which `a` and `b` hold equal values. Positions past the end of the
/// shorter slice don't count.
///
/// # Examples
///
/// ```
/// use algobench::control::count_duplicates;
///
/// assert_eq!(count_duplicates(&[1, 2, 3, 4], &[1, 0, 3]), 2);
/// ```
pub fn count_duplicates(a: &[i64], b: &[i64]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}

/// [`count_duplicates`] with two nested loops over every pair of positions.
pub fn count_duplicates_naive(a: &[i64], b: &[i64]) -> usize {
    let mut count = 0;
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            if i == j && x == y {
                count += 1;
            }
        }
    }
    count
}

/// Sum of every element of a matrix. Rows may have different lengths.
pub fn sum_matrix(m: &[Vec<u64>]) -> u64 {
    let mut sum = 0;
    for row in m {
        for &x in row {
            sum += x;
        }
    }
    sum
}
