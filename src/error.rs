//! Error and Result types for the fallible algorithms, the database lookups and the harness.

use thiserror::Error;

/// A convenience `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for algorithms rejecting their input.
///
/// The binary search tree never fails: values must be [`Ord`] so every comparison succeeds, and
/// inserting a duplicate is a no-op rather than an error.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// An argument that must be non-negative was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeInput {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: i64,
    },

    /// A sequence had fewer elements than the operation needs.
    #[error("{0}: not enough elements")]
    EmptyInput(&'static str),

    /// A modulus of zero was given.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// A rotation amount larger than the list.
    #[error("rotation by {n} exceeds list length {len}")]
    RotationOutOfRange {
        /// Requested rotation.
        n: usize,
        /// Length of the list.
        len: usize,
    },

    /// Random values were requested from the empty range `[0, upper)`.
    #[error("cannot draw values from the empty range [0, {upper})")]
    EmptyRange {
        /// The exclusive upper bound.
        upper: u64,
    },

    /// A benchmark was configured to run zero times.
    #[error("benchmark iterations must be non-zero")]
    ZeroIterations,

    /// The exact result doesn't fit in the return type.
    #[error("{op}: result overflows")]
    Overflow {
        /// Name of the operation.
        op: &'static str,
    },

    /// Opening or querying the database failed.
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
