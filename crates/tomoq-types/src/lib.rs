//! `tomoq-types` — shared types for projection-based reconstruction.
//!
//! A [`LinearSystem`] bundles the projection matrix A and measurement
//! vector b of the sampled line integrals, validated once at construction
//! and immutable afterwards. A [`PixelOrder`] is a checked bijection
//! between the caller's row-major pixel indices and the basis ordering a
//! simulator uses internally.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use tomoq_types::LinearSystem;
//!
//! let a = array![[1.0, 0.0], [0.0, 1.0]];
//! let b = array![2.0, 3.0];
//! let system = LinearSystem::new(a, b).unwrap();
//! assert_eq!(system.num_pixels(), 2);
//! ```

pub mod error;
pub mod order;
pub mod system;

pub use error::{TypesError, TypesResult};
pub use order::PixelOrder;
pub use system::LinearSystem;
