//! Copying list transforms. None of these modify their input.

use crate::error::{Error, Result};

/// A copy of `v` with 1 added to every element.
pub fn modify_list(v: &[i64]) -> Vec<i64> {
    v.iter().map(|x| x + 1).collect()
}

/// Indices at which `v` holds `n`, ascending.
pub fn search_list(v: &[i64], n: i64) -> Vec<usize> {
    v.iter()
        .enumerate()
        .filter(|(_, &x)| x == n)
        .map(|(i, _)| i)
        .collect()
}

/// A sorted copy of `v`. See [`crate::sort::bubble_sort`].
pub fn sort_list(v: &[i64]) -> Vec<i64> {
    crate::sort::bubble_sort(v)
}

/// A reversed copy of `v`.
pub fn reverse_list(v: &[i64]) -> Vec<i64> {
    v.iter().rev().copied().collect()
}

/// A copy of `v` rotated left by `n` positions.
///
/// Fails with [`Error::RotationOutOfRange`] if `v` is non-empty and `n` is larger than its
/// length. Rotating by exactly the length gives back the original order.
///
/// # Examples
///
/// ```
/// use algobench::dslist::rotate_list;
///
/// assert_eq!(rotate_list(&[1, 2, 3, 4, 5], 2).unwrap(), vec![3, 4, 5, 1, 2]);
/// assert!(rotate_list(&[1, 2], 3).is_err());
/// ```
pub fn rotate_list(v: &[i64], n: usize) -> Result<Vec<i64>> {
    if v.is_empty() {
        return Ok(Vec::new());
    }
    if n > v.len() {
        return Err(Error::RotationOutOfRange { n, len: v.len() });
    }

    let (head, tail) = v.split_at(n);
    Ok(tail.iter().chain(head).copied().collect())
}

/// `a` followed by `b`, in a new `Vec`.
pub fn merge_lists(a: &[i64], b: &[i64]) -> Vec<i64> {
    [a, b].concat()
}
