//! Times a naive implementation against an optimized one and reports the speedup.
//!
//! # Example
//!
//! ```
//! use algobench::harness::{Comparison, HarnessConfig};
//! use algobench::primes::{prime_factors, prime_factors_naive};
//!
//! let config = HarnessConfig::new(10, 0);
//! let comparison = Comparison::run(
//!     "prime_factors(84)",
//!     &config,
//!     || prime_factors_naive(84),
//!     || prime_factors(84),
//! )
//! .unwrap();
//!
//! assert_eq!(comparison.iterations(), 10);
//! println!("{}", comparison);
//! ```

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::Tree;
use crate::{control, primes, sort, strops};

/// Default number of timed calls per implementation.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Default number of untimed calls made before timing starts.
pub const DEFAULT_WARMUP: u32 = 1;

/// How many times each implementation is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of timed calls.
    pub iterations: u32,
    /// Number of untimed calls before the timed ones.
    pub warmup: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }
}

impl HarnessConfig {
    /// Creates a harness configuration with custom settings.
    pub fn new(iterations: u32, warmup: u32) -> Self {
        Self { iterations, warmup }
    }
}

/// Total time taken by the naive (`old`) and optimized (`new`) implementations of one
/// operation over the same number of calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    name: String,
    iterations: u32,
    old: Duration,
    new: Duration,
}

impl Comparison {
    /// Calls `old` and then `new` `config.iterations` times each and records how long each
    /// took. Return values are passed through [`black_box`] so the calls aren't optimized out.
    ///
    /// Fails with [`Error::ZeroIterations`] if the configuration asks for no timed calls.
    pub fn run<O, N, A, B>(
        name: impl Into<String>,
        config: &HarnessConfig,
        mut old: O,
        mut new: N,
    ) -> Result<Self>
    where
        O: FnMut() -> A,
        N: FnMut() -> B,
    {
        if config.iterations == 0 {
            return Err(Error::ZeroIterations);
        }

        let old = time(config, &mut old);
        let new = time(config, &mut new);
        let comparison = Self::from_durations(name, config.iterations, old, new);
        debug!(
            name = %comparison.name,
            old = ?comparison.old,
            new = ?comparison.new,
            speedup = comparison.speedup(),
            "benchmark finished"
        );

        Ok(comparison)
    }

    /// A comparison from already measured durations.
    pub fn from_durations(
        name: impl Into<String>,
        iterations: u32,
        old: Duration,
        new: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            iterations,
            old,
            new,
        }
    }

    /// What was benchmarked.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Timed calls per implementation.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Total time of the naive implementation.
    pub fn old_time(&self) -> Duration {
        self.old
    }

    /// Total time of the optimized implementation.
    pub fn new_time(&self) -> Duration {
        self.new
    }

    /// How many times faster the optimized implementation was. Infinite if it took no
    /// measurable time.
    pub fn speedup(&self) -> f64 {
        let new = self.new.as_secs_f64();
        if new == 0.0 {
            f64::INFINITY
        } else {
            self.old.as_secs_f64() / new
        }
    }

    /// Time saved as a percentage of the naive implementation's time. Negative when the
    /// optimized implementation was slower; zero if the naive one took no measurable time.
    pub fn improvement_pct(&self) -> f64 {
        let old = self.old.as_secs_f64();
        if old == 0.0 {
            0.0
        } else {
            (old - self.new.as_secs_f64()) / old * 100.0
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{}", rule)?;
        writeln!(f, "BENCHMARK: {}", self.name)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f)?;
        writeln!(
            f,
            "Old Implementation: {:12.6} seconds",
            self.old.as_secs_f64()
        )?;
        writeln!(
            f,
            "New Implementation: {:12.6} seconds",
            self.new.as_secs_f64()
        )?;
        writeln!(f)?;
        writeln!(f, "Speedup:            {:12.2}x faster", self.speedup())?;
        write!(f, "Improvement:        {:12.2}%", self.improvement_pct())
    }
}

fn time<F, R>(config: &HarnessConfig, f: &mut F) -> Duration
where
    F: FnMut() -> R,
{
    for _ in 0..config.warmup {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..config.iterations {
        black_box(f());
    }
    start.elapsed()
}

/// Runs every naive/optimized pair in the crate.
pub fn standard_comparisons(config: &HarnessConfig) -> Result<Vec<Comparison>> {
    let small: [i64; 5] = [5, 4, 3, 2, 1];
    let large: Vec<i64> = (1..=100).rev().collect();
    let left: Vec<i64> = (0..200).map(|i| i % 7).collect();
    let right: Vec<i64> = (0..200).map(|i| i % 5).collect();
    let skewed: Tree<u32> = (0..500).collect();

    Ok(vec![
        Comparison::run(
            "is_prime(97)",
            config,
            || primes::is_prime_ineff(black_box(97)),
            || primes::is_prime(black_box(97)),
        )?,
        Comparison::run(
            "prime_factors(84)",
            config,
            || primes::prime_factors_naive(black_box(84)),
            || primes::prime_factors(black_box(84)),
        )?,
        Comparison::run(
            "sort_list([5, 4, 3, 2, 1])",
            config,
            || sort::bubble_sort(&small),
            || sorted_copy(&small),
        )?,
        Comparison::run(
            "sort_list(large_list) - 100 elements",
            config,
            || sort::bubble_sort(&large),
            || sorted_copy(&large),
        )?,
        Comparison::run(
            "str_reverse('racecar')",
            config,
            || strops::str_reverse_naive(black_box("racecar")),
            || strops::str_reverse(black_box("racecar")),
        )?,
        Comparison::run(
            "count_duplicates(200, 200)",
            config,
            || control::count_duplicates_naive(&left, &right),
            || control::count_duplicates(&left, &right),
        )?,
        Comparison::run(
            "sum_range(1000)",
            config,
            || control::sum_range_naive(black_box(1_001)),
            || control::sum_range(black_box(1_000)),
        )?,
        Comparison::run(
            "tree search, 500 skewed nodes",
            config,
            || skewed.search(black_box(&499)),
            || skewed.search_iterative(black_box(&499)),
        )?,
    ])
}

fn sorted_copy(v: &[i64]) -> Vec<i64> {
    let mut copy = v.to_vec();
    sort::sort_list(&mut copy);
    copy
}
