//! Error types for the HHL crate.

use thiserror::Error;

use tomoq_sim::SimError;

/// Errors produced by the HHL pipeline and its builders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HhlError {
    /// The input system is degenerate: b projects to zero against A, or
    /// the Hermitian surrogate lost positive-definiteness.
    #[error("degenerate system: {detail}")]
    DegenerateSystem {
        /// What went wrong.
        detail: String,
    },

    /// A precomputed evolution operator deviates from unitary beyond
    /// tolerance. This is a construction bug, not a data problem.
    #[error("evolution operator {k} deviates from unitary by {deviation:.3e}")]
    UnitarityViolation {
        /// Dyadic time-scale index of the offending operator.
        k: usize,
        /// Largest entry of |U†U − I|.
        deviation: f64,
    },

    /// The ancilla=1 subspace carries negligible amplitude: the
    /// eigenvalue table did not cover the support of the prepared state.
    #[error("postselection failed: ancilla subspace norm {norm:.3e}")]
    FailedPostselection {
        /// Norm of the postselected vector.
        norm: f64,
    },

    /// System size is not a power of two, so no system register fits it.
    #[error("system has {pixels} pixels, which is not a power of two")]
    DimensionNotPowerOfTwo {
        /// Number of unknowns.
        pixels: usize,
    },

    /// A table pattern does not fit in the clock register.
    #[error("clock pattern {pattern:#b} does not fit in {clock_qubits} clock qubits")]
    PatternOutOfRange {
        /// The offending bit pattern.
        pattern: u32,
        /// Configured clock width.
        clock_qubits: usize,
    },

    /// A table eigenvalue below 1 has no real rotation angle
    /// (θ = 2·arcsin(1/λ) requires λ ≥ 1).
    #[error("table eigenvalue {lambda} is below 1; arcsin(1/λ) is undefined")]
    EigenvalueTooSmall {
        /// The offending eigenvalue.
        lambda: f64,
    },

    /// The configured pixel ordering is not a valid permutation.
    #[error("invalid pixel order: {0}")]
    InvalidPixelOrder(#[from] tomoq_types::TypesError),

    /// The global-phase reference index is outside the pixel range.
    #[error("reference index {index} is out of range for {pixels} pixels")]
    ReferenceOutOfRange {
        /// Configured index.
        index: usize,
        /// Number of pixels.
        pixels: usize,
    },

    /// Probability mass landed on clock patterns absent from the table
    /// while the reject policy was active.
    #[error("clock patterns outside the eigenvalue table carry probability {mass:.3e}")]
    UncoveredPhasePattern {
        /// Total probability on uncovered patterns.
        mass: f64,
    },

    /// Statevector operation failed.
    #[error("simulator error: {0}")]
    Sim(#[from] SimError),
}

/// Result type for HHL operations.
pub type HhlResult<T> = Result<T, HhlError>;
