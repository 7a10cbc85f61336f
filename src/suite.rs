//! Runs a list of named sections and reports which passed.
//!
//! A section is a closure producing the lines it wants printed. A section returning an error is
//! recorded as failed and the remaining sections still run.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::harness::HarnessConfig;
use crate::tree::Tree;
use crate::sql::{self, Database};
use crate::{control, dslist, generator, primes, sort, strops};

/// Default length of the random lists sections generate.
pub const DEFAULT_LIST_LEN: usize = 30;

/// Default exclusive upper bound of the random values sections generate.
pub const DEFAULT_UPPER_BOUND: u32 = 10;

/// Settings shared by every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Timing settings for naive/optimized comparisons.
    pub harness: HarnessConfig,
    /// Length of generated random lists.
    pub list_len: usize,
    /// Generated values are drawn from `[0, upper_bound)`.
    pub upper_bound: u32,
    /// Database the SQL section queries.
    pub db_path: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            harness: HarnessConfig::default(),
            list_len: DEFAULT_LIST_LEN,
            upper_bound: DEFAULT_UPPER_BOUND,
            db_path: PathBuf::from(sql::DEFAULT_DB_PATH),
        }
    }
}

type Section = Box<dyn Fn(&SuiteConfig) -> Result<Vec<String>>>;

/// An ordered list of named sections.
pub struct Suite {
    config: SuiteConfig,
    sections: Vec<(&'static str, Section)>,
}

impl Suite {
    /// A suite with no sections.
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
        }
    }

    /// A suite exercising every algorithm in the crate once.
    pub fn standard(config: SuiteConfig) -> Self {
        Self::new(config)
            .section("SingleForLoop", single_section)
            .section("DoubleForLoop", double_section)
            .section("SQL", sql_section)
            .section("Primes", primes_section)
            .section("Sort", sort_section)
            .section("DsList", dslist_section)
            .section("Strops", strops_section)
            .section("BST", bst_section)
    }

    /// Appends a section.
    pub fn section<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn(&SuiteConfig) -> Result<Vec<String>> + 'static,
    {
        self.sections.push((name, Box::new(f)));
        self
    }

    /// Names of the sections, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|(name, _)| *name)
    }

    /// Runs every section in order.
    pub fn run(&self) -> SuiteReport {
        let sections = self
            .sections
            .iter()
            .map(|&(name, ref section)| {
                let outcome = match section(&self.config) {
                    Ok(lines) => {
                        debug!(section = name, "section passed");
                        Outcome::Passed(lines)
                    }
                    Err(e) => {
                        warn!(section = name, error = %e, "section failed");
                        Outcome::Failed(e)
                    }
                };
                SectionReport { name, outcome }
            })
            .collect();

        SuiteReport { sections }
    }
}

/// What a section produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The section finished and produced these lines.
    Passed(Vec<String>),
    /// The section stopped with this error.
    Failed(Error),
}

/// The outcome of one named section.
#[derive(Debug, PartialEq)]
pub struct SectionReport {
    /// Name of the section.
    pub name: &'static str,
    /// How it went.
    pub outcome: Outcome,
}

/// The outcome of every section of a [`Suite`] run.
#[derive(Debug, PartialEq)]
pub struct SuiteReport {
    sections: Vec<SectionReport>,
}

impl SuiteReport {
    /// Per-section outcomes in run order.
    pub fn sections(&self) -> &[SectionReport] {
        &self.sections
    }

    /// Number of sections that passed.
    pub fn passed(&self) -> usize {
        self.sections.len() - self.failed()
    }

    /// Number of sections that failed.
    pub fn failed(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed(_)))
            .count()
    }

    /// Whether every section passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Names of the sections that failed, in run order.
    pub fn failed_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed(_)))
            .map(|s| s.name)
    }

    /// A closing summary of the counts and the failed sections, for printing after the
    /// report itself.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Display adapter returned by [`SuiteReport::summary`].
pub struct Summary<'a>(&'a SuiteReport);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(50);

        writeln!(f, "{}", rule)?;
        writeln!(f, "BENCHMARK EXECUTION SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total benchmarks: {}", report.sections.len())?;
        writeln!(f, "Successful: {}", report.passed())?;
        writeln!(f, "Failed: {}", report.failed())?;
        if !report.is_success() {
            writeln!(f)?;
            writeln!(f, "Failed benchmarks:")?;
            for name in report.failed_names() {
                writeln!(f, "  - {}", name)?;
            }
        }
        write!(f, "{}", rule)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.name)?;
            writeln!(f, "{}", "-".repeat(section.name.len()))?;
            match &section.outcome {
                Outcome::Passed(lines) => {
                    for line in lines {
                        writeln!(f, "{}", line)?;
                    }
                }
                Outcome::Failed(e) => writeln!(f, "FAILED: {}", e)?,
            }
            writeln!(f)?;
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

fn random_signed(config: &SuiteConfig, count: usize) -> Result<Vec<i64>> {
    let values = generator::random_list(count, u64::from(config.upper_bound))?;
    // Every value is below a `u32` bound so it fits.
    Ok(values.into_iter().map(|v| v as i64).collect())
}

fn single_section(_: &SuiteConfig) -> Result<Vec<String>> {
    Ok(vec![
        format!("sum_range(10): {}", control::sum_range(10)?),
        format!("max_list([1, 2, 3]): {}", control::max_list(&[1, 2, 3])?),
        format!("sum_modulus(100, 3): {}", control::sum_modulus(100, 3)?),
    ])
}

fn double_section(config: &SuiteConfig) -> Result<Vec<String>> {
    let pairs = random_signed(config, config.list_len)?;
    let a = random_signed(config, 10)?;
    let b = random_signed(config, 10)?;
    let matrix = generator::random_matrix(10, u64::from(config.upper_bound))?;

    Ok(vec![
        format!("sum_square(10): {}", control::sum_square(10)?),
        format!("sum_triangle(10): {}", control::sum_triangle(10)),
        format!(
            "count_pairs(random_list({}, {})): {}",
            config.list_len,
            config.upper_bound,
            control::count_pairs(&pairs)
        ),
        format!("count_duplicates(10, 10): {}", control::count_duplicates(&a, &b)),
        format!(
            "sum_matrix(random_matrix(10, {})): {}",
            config.upper_bound,
            control::sum_matrix(&matrix)
        ),
    ])
}

fn sql_section(config: &SuiteConfig) -> Result<Vec<String>> {
    let db = Database::open(&config.db_path)?;

    let mut lines = vec![
        format!("query_album('Presence'): {}", db.query_album("Presence")?),
        format!("query_album('Roundabout'): {}", db.query_album("Roundabout")?),
    ];
    if let Some(first) = db.join_albums()?.first() {
        lines.push(format!(
            "join_albums()[0]: ({:?}, {:?}, {:?})",
            first.track, first.album, first.artist
        ));
    }
    for invoice in db.top_invoices()? {
        lines.push(format!(
            "top_invoices: #{} customer {} total {:.2}",
            invoice.invoice_id, invoice.customer_id, invoice.total
        ));
    }

    Ok(lines)
}

fn primes_section(_: &SuiteConfig) -> Result<Vec<String>> {
    Ok(vec![
        format!("is_prime(1700): {}", primes::is_prime_ineff(1_700)),
        format!("sum_primes(210): {}", primes::sum_primes(210)),
        format!("prime_factors(840): {:?}", primes::prime_factors(840)),
    ])
}

fn sort_section(_: &SuiteConfig) -> Result<Vec<String>> {
    let original: [i64; 5] = [5, 3, 2, 1, 4];

    let mut sorted = original;
    sort::sort_list(&mut sorted);
    let mut partitioned = original;
    sort::dutch_flag_partition(&mut partitioned, 3);

    Ok(vec![
        format!("sort_list({:?}): {:?}", original, sorted),
        format!("dutch_flag_partition({:?}, 3): {:?}", original, partitioned),
        format!("max_n({:?}, 3): {:?}", original, sort::max_n(&original, 3)?),
    ])
}

fn dslist_section(_: &SuiteConfig) -> Result<Vec<String>> {
    let list: [i64; 5] = [1, 2, 3, 4, 5];

    Ok(vec![
        format!("Original list: {:?}", list),
        format!("Modified list: {:?}", dslist::modify_list(&list)),
        format!("Search result for 3: {:?}", dslist::search_list(&list, 3)),
        format!("Sorted list: {:?}", dslist::sort_list(&list)),
        format!("Reversed list: {:?}", dslist::reverse_list(&list)),
        format!(
            "Rotated list by 2 positions: {:?}",
            dslist::rotate_list(&list, 2)?
        ),
        format!(
            "Merged list with [6, 7, 8]: {:?}",
            dslist::merge_lists(&list, &[6, 7, 8])
        ),
    ])
}

fn strops_section(_: &SuiteConfig) -> Result<Vec<String>> {
    let s = "racecar";

    Ok(vec![
        format!("Original string: {}", s),
        format!("Reversed string: {}", strops::str_reverse(s)),
        format!("Is palindrome: {}", strops::palindrome(s)),
    ])
}

fn bst_section(config: &SuiteConfig) -> Result<Vec<String>> {
    let values = generator::random_list(config.list_len, u64::from(config.upper_bound))?;
    let tree: Tree<_> = values.iter().copied().collect();
    let target = u64::from(config.upper_bound / 2);

    Ok(vec![
        format!("Inserted: {:?}", values),
        format!("Size: {}, height: {}", tree.size(), tree.height()),
        format!("Inorder: {:?}", tree.inorder()),
        format!(
            "search({}): {}, search_iterative({}): {}",
            target,
            tree.search(&target),
            target,
            tree.search_iterative(&target)
        ),
        format!("Valid BST: {}", tree.is_valid_bst()),
    ])
}
