//! `tomoq-art` — classical algebraic reconstruction (ART).
//!
//! Solves the projection system Ax = b by cyclic row relaxation
//! (Kaczmarz sweeps): each row's residual is projected back onto the
//! current estimate, scaled by a relaxation factor ω ∈ (0, 2].
//!
//! The sweep order is the fixed ascending row order, so results are fully
//! deterministic; there is no convergence test — the caller picks the
//! sweep count.
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use tomoq_art::Art;
//! use tomoq_types::LinearSystem;
//!
//! let system = LinearSystem::new(
//!     array![[2.0, 0.0], [0.0, 4.0]],
//!     array![2.0, 8.0],
//! ).unwrap();
//! let x = Art::new(25, 1.0).unwrap().solve(&system);
//! assert!((x[0] - 1.0).abs() < 1e-9);
//! assert!((x[1] - 2.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod solver;

pub use error::{ArtError, ArtResult};
pub use solver::Art;
