//! Error types for the shared types crate.

use thiserror::Error;

/// Errors produced when constructing projection-system types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TypesError {
    /// Measurement vector length does not match the matrix row count.
    #[error("matrix has {rows} rows but measurement vector has {measurements} entries")]
    RowCountMismatch {
        /// Number of matrix rows (rays).
        rows: usize,
        /// Number of measurement entries.
        measurements: usize,
    },

    /// A matrix or measurement entry is NaN or infinite.
    #[error("non-finite entry in {location}")]
    NonFiniteEntry {
        /// Which input contained the bad entry.
        location: &'static str,
    },

    /// A pixel ordering is not a bijection on `0..len`.
    #[error("pixel order {order:?} is not a permutation of 0..{len}")]
    NotAPermutation {
        /// The offending mapping.
        order: Vec<usize>,
        /// Expected domain size.
        len: usize,
    },
}

/// Result type for type-construction operations.
pub type TypesResult<T> = Result<T, TypesError>;
