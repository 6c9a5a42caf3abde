//! `tomoq-sim` — dense statevector simulation.
//!
//! A minimal, exact simulator for the gate set the HHL pipeline needs:
//! Hadamard, X, swap, controlled phase, multi-controlled Y-rotation,
//! controlled dense unitaries on a subregister, subregister
//! initialization, projective measurement and postselected readout.
//!
//! One [`Statevector`] is owned per simulation run and mutated in place;
//! every gate preserves the total norm, only [`Statevector::measure`]
//! collapses. Qubit index k corresponds to bit k of the basis index
//! (qubit 0 is least significant).
//!
//! The [`qft`] module provides the quantum Fourier transform and its
//! inverse over an arbitrary qubit subset with a fixed, tested bit-order
//! convention — phase-estimation correctness depends on it.

pub mod error;
pub mod layout;
pub mod qft;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use layout::RegisterLayout;
pub use statevector::Statevector;
