//! In-place sorting and partitioning of integer slices.

use crate::error::{Error, Result};

/// Sorts `v` in place with quicksort.
///
/// Each partition moves its middle element to the end and uses it as the pivot, so already
/// sorted input doesn't degrade to quadratic time.
///
/// # Examples
///
/// ```
/// use algobench::sort::sort_list;
///
/// let mut v = [5, 3, 2, 1, 4];
/// sort_list(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn sort_list(v: &mut [i64]) {
    if v.len() > 1 {
        quicksort(v);
    }
}

fn quicksort(v: &mut [i64]) {
    if v.len() <= 1 {
        return;
    }
    let pivot = partition(v);
    let (left, right) = v.split_at_mut(pivot);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// Lomuto partition around the middle element. Returns the pivot's final index.
fn partition(v: &mut [i64]) -> usize {
    let last = v.len() - 1;
    v.swap(last / 2, last);
    let pivot = v[last];

    let mut store = 0;
    for j in 0..last {
        if v[j] < pivot {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, last);
    store
}

/// Returns a sorted copy of `v` using an `O(n²)` exchange sort.
pub fn bubble_sort(v: &[i64]) -> Vec<i64> {
    let mut sorted = v.to_vec();
    for i in 0..sorted.len() {
        for j in i + 1..sorted.len() {
            if sorted[i] > sorted[j] {
                sorted.swap(i, j);
            }
        }
    }
    sorted
}

/// Rearranges `v` so every element less than `pivot` comes first, then every element equal to
/// it, then everything greater. Relative order within each group is not preserved.
///
/// # Examples
///
/// ```
/// use algobench::sort::dutch_flag_partition;
///
/// let mut v = [5, 3, 2, 1, 4];
/// dutch_flag_partition(&mut v, 3);
/// assert_eq!(v, [2, 1, 3, 5, 4]);
/// ```
pub fn dutch_flag_partition(v: &mut [i64], pivot: i64) {
    let mut next = 0;
    for i in 0..v.len() {
        if v[i] < pivot {
            v.swap(i, next);
            next += 1;
        }
    }
    for i in next..v.len() {
        if v[i] == pivot {
            v.swap(i, next);
            next += 1;
        }
    }
}

/// The `n` largest values of `v`, largest first.
///
/// Fails with [`Error::EmptyInput`] if `v` has fewer than `n` elements.
pub fn max_n(v: &[i64], n: usize) -> Result<Vec<i64>> {
    if n > v.len() {
        return Err(Error::EmptyInput("max_n"));
    }

    let mut remaining = v.to_vec();
    let mut largest = Vec::with_capacity(n);
    for _ in 0..n {
        let (idx, _) = remaining
            .iter()
            .enumerate()
            .max_by_key(|(_, &x)| x)
            .ok_or(Error::EmptyInput("max_n"))?;
        largest.push(remaining.swap_remove(idx));
    }

    Ok(largest)
}
