//! Precomputed dyadic time evolutions for phase estimation.

use nalgebra::DMatrix;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{HhlError, HhlResult};
use crate::hermitian::HermitianSystem;

/// Largest tolerated entry of |U†U − I| per operator.
pub const UNITARITY_TOLERANCE: f64 = 1e-10;

/// The family U_k = exp(i·A_h·2^k·t0) for k = 0..K−1.
///
/// Built once from the eigen-decomposition of A_h — a truncated series
/// exponential would drift off the unitary group, so each operator is
/// assembled as V·diag(e^{iλ·2^k·t0})·Vᵗ and then checked against
/// [`UNITARITY_TOLERANCE`]. Read-only after construction; phase
/// estimation applies `forward`, its inverse applies `inverse` (the
/// conjugate transpose, equivalently exp(−i·A_h·2^k·t0)).
pub struct EvolutionBank {
    forward: Vec<DMatrix<Complex64>>,
}

impl EvolutionBank {
    /// Precompute one operator per clock qubit.
    pub fn build(system: &HermitianSystem, clock_qubits: usize) -> HhlResult<Self> {
        let n = system.num_pixels();
        let eigenvalues = system.eigenvalues();
        let eigenvectors = system.eigenvectors();
        let t0 = system.t0();

        let mut forward = Vec::with_capacity(clock_qubits);
        for k in 0..clock_qubits {
            let time = (1u64 << k) as f64 * t0;
            let mut u = DMatrix::from_element(n, n, Complex64::new(0.0, 0.0));
            for l in 0..n {
                let phase = Complex64::from_polar(1.0, eigenvalues[l] * time);
                for i in 0..n {
                    for j in 0..n {
                        u[(i, j)] += phase * eigenvectors[(i, l)] * eigenvectors[(j, l)];
                    }
                }
            }
            let deviation = unitarity_deviation(&u);
            if deviation > UNITARITY_TOLERANCE {
                return Err(HhlError::UnitarityViolation { k, deviation });
            }
            forward.push(u);
        }
        debug!(operators = forward.len(), t0, "built evolution bank");
        Ok(Self { forward })
    }

    /// Number of operators (clock qubits).
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True when no operators were built.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The forward evolution U_k.
    pub fn forward(&self, k: usize) -> &DMatrix<Complex64> {
        &self.forward[k]
    }

    /// The inverse evolution U_k† = exp(−i·A_h·2^k·t0).
    pub fn inverse(&self, k: usize) -> DMatrix<Complex64> {
        self.forward[k].adjoint()
    }
}

/// Largest entry of |U†U − I|.
fn unitarity_deviation(u: &DMatrix<Complex64>) -> f64 {
    let n = u.nrows();
    let product = u.adjoint() * u;
    let mut worst = 0.0_f64;
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
            worst = worst.max((product[(i, j)] - expected).norm());
        }
    }
    worst
}
