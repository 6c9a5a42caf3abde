//! The reference 2×2 tomography scenario.
//!
//! A phantom
//!
//! ```text
//! 1 2
//! 3 4
//! ```
//!
//! is projected at 0° (column sums along rays through pixel pairs
//! {0,2} and {1,3}) and 90° (row sums through {0,1} and {2,3}),
//! giving four ray measurements for four unknowns.

use ndarray::array;
use tomoq_types::LinearSystem;

/// Ground-truth pixel values, row-major.
pub const PHANTOM: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Ray-sum system for the phantom at 0° and 90°.
pub fn reference_scenario() -> LinearSystem {
    LinearSystem::new(
        array![
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ],
        array![4.0, 6.0, 3.0, 7.0],
    )
    .expect("reference system is well formed")
}

/// The phantom scaled to unit norm, for comparison against the
/// normalized HHL output.
pub fn normalized_phantom() -> Vec<f64> {
    let norm = PHANTOM.iter().map(|v| v * v).sum::<f64>().sqrt();
    PHANTOM.iter().map(|v| v / norm).collect()
}
