//! Error types for the ART crate.

use thiserror::Error;

/// Errors produced when configuring the ART solver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArtError {
    /// sweeps must be ≥ 1.
    #[error("sweep count must be at least 1, got {0}")]
    InvalidSweeps(usize),

    /// relaxation factor must lie in (0, 2].
    #[error("relaxation factor must lie in (0, 2], got {0}")]
    InvalidRelaxation(f64),
}

/// Result type for ART operations.
pub type ArtResult<T> = Result<T, ArtError>;
