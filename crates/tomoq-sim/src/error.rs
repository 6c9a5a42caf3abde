//! Error types for the simulator crate.

use thiserror::Error;

/// Errors produced by statevector operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A gate references a qubit index outside the register.
    #[error("gate references qubit {qubit} but the statevector has {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the statevector.
        num_qubits: usize,
    },

    /// The same qubit appears twice in one gate operand list.
    #[error("qubit {qubit} appears more than once in a gate operand list")]
    DuplicateQubit {
        /// The repeated qubit index.
        qubit: usize,
    },

    /// An amplitude vector or unitary has the wrong dimension.
    #[error("expected dimension {expected}, got {got}")]
    DimensionMismatch {
        /// Required dimension.
        expected: usize,
        /// Supplied dimension.
        got: usize,
    },

    /// Subregister initialization requires the all-zeros state.
    #[error("subregister initialization requires the statevector to be in |0…0⟩")]
    NotGroundState,

    /// An amplitude vector is not normalized to unit Euclidean norm.
    #[error("amplitude vector has norm {norm}, expected 1")]
    NotNormalized {
        /// The offending norm.
        norm: f64,
    },
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
