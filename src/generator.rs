//! Random fill data for benchmarks.
//!
//! Every value is drawn uniformly from `[0, upper)`. The upper bound is exclusive.

use rand::Rng;

use crate::error::{Error, Result};

/// `count` random values in `[0, upper)`, from the thread-local generator.
///
/// Fails with [`Error::EmptyRange`] if `upper` is zero and values were requested.
///
/// # Examples
///
/// ```
/// use algobench::generator::random_list;
///
/// let values = random_list(1_000, 10).unwrap();
/// assert_eq!(values.len(), 1_000);
/// assert!(values.iter().all(|&v| v < 10));
/// ```
pub fn random_list(count: usize, upper: u64) -> Result<Vec<u64>> {
    random_list_with(&mut rand::thread_rng(), count, upper)
}

/// `n` rows of `n` random values in `[0, upper)`, from the thread-local generator.
pub fn random_matrix(n: usize, upper: u64) -> Result<Vec<Vec<u64>>> {
    random_matrix_with(&mut rand::thread_rng(), n, upper)
}

/// [`random_list`] drawing from `rng`.
pub fn random_list_with<R>(rng: &mut R, count: usize, upper: u64) -> Result<Vec<u64>>
where
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if upper == 0 {
        return Err(Error::EmptyRange { upper });
    }
    Ok((0..count).map(|_| rng.gen_range(0..upper)).collect())
}

/// [`random_matrix`] drawing from `rng`.
pub fn random_matrix_with<R>(rng: &mut R, n: usize, upper: u64) -> Result<Vec<Vec<u64>>>
where
    R: Rng + ?Sized,
{
    (0..n).map(|_| random_list_with(rng, n, upper)).collect()
}
