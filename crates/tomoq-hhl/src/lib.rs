//! `tomoq-hhl` — simulated quantum matrix inversion.
//!
//! Solves the projection system Ax = b by running the HHL algorithm on
//! the dense statevector simulator from `tomoq-sim`:
//!
//! 1. Build the Hermitian positive-definite surrogate A_h = AᵗA + I with
//!    right-hand side b_h = Aᵗb ([`HermitianSystem`]).
//! 2. Precompute the controlled evolutions U_k = exp(i·A_h·2^k·t0)
//!    ([`EvolutionBank`]).
//! 3. Run state preparation, phase estimation, table-driven eigenvalue
//!    inversion, inverse phase estimation and postselected extraction
//!    ([`HhlPipeline`]).
//!
//! The eigenvalue-inversion step is a calibration-table lookup, not a
//! general arithmetic inversion: only clock patterns listed in
//! [`HhlConfig::eigenvalue_table`] receive ancilla amplitude. That is a
//! known approximation scoped to this demonstrator; what happens to the
//! remaining patterns is governed by [`UncoveredPolicy`].
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use tomoq_hhl::HhlPipeline;
//! use tomoq_types::LinearSystem;
//!
//! let system = LinearSystem::new(
//!     array![
//!         [1.0, 0.0, 1.0, 0.0],
//!         [0.0, 1.0, 0.0, 1.0],
//!         [1.0, 1.0, 0.0, 0.0],
//!         [0.0, 0.0, 1.0, 1.0],
//!     ],
//!     array![4.0, 6.0, 3.0, 7.0],
//! ).unwrap();
//! let outcome = HhlPipeline::with_defaults().run(&system).unwrap();
//! assert_eq!(outcome.pixels.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod evolution;
pub mod hermitian;
pub mod pipeline;

pub use config::{EigenvalueEntry, HhlConfig, UncoveredPolicy};
pub use error::{HhlError, HhlResult};
pub use evolution::EvolutionBank;
pub use hermitian::HermitianSystem;
pub use pipeline::{HhlPipeline, Reconstruction};
