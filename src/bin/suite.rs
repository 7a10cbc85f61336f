//! Runs every algorithm once, then times every naive/optimized pair.
//!
//! The optional first argument is the path of the Chinook database for the SQL section.
//! Exits with a non-zero status if any section failed.

use std::path::PathBuf;
use std::process::ExitCode;

use algobench::harness::standard_comparisons;
use algobench::suite::{Suite, SuiteConfig};

fn main() -> ExitCode {
    let mut config = SuiteConfig::default();
    if let Some(path) = std::env::args_os().nth(1) {
        config.db_path = PathBuf::from(path);
    }
    let harness = config.harness;

    let report = Suite::standard(config).run();
    println!("{}", report);

    match standard_comparisons(&harness) {
        Ok(comparisons) => {
            for comparison in comparisons {
                println!();
                println!("{}", comparison);
            }
        }
        Err(e) => {
            eprintln!("benchmarks failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("{}", report.summary());

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
