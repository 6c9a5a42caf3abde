//! Hermitian positive-definite surrogate system.
//!
//! HHL inverts Hermitian matrices, but a projection matrix is neither
//! square nor symmetric in general. The surrogate
//!
//!   A_h = AᵗA + I,   b_h = Aᵗb
//!
//! is symmetric positive-definite by construction (AᵗA is PSD, the added
//! identity makes it strictly positive), so its eigenvalues are real and
//! strictly positive — which the arcsin(1/λ) rotation step requires.

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use std::f64::consts::TAU;
use tracing::debug;

use tomoq_types::{LinearSystem, PixelOrder};

use crate::error::{HhlError, HhlResult};

/// Norm below which b_h counts as zero (degenerate input).
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// The Hermitian surrogate of a projection system, with its spectrum and
/// the phase-estimation time scale t0 = 2π/λ_max.
#[derive(Debug, Clone)]
pub struct HermitianSystem {
    a_h: DMatrix<f64>,
    b_h: DVector<f64>,
    b_norm: DVector<f64>,
    eigenvalues: DVector<f64>,
    eigenvectors: DMatrix<f64>,
    t0: f64,
}

impl HermitianSystem {
    /// Build the surrogate from a projection system.
    ///
    /// Fails with [`HhlError::DegenerateSystem`] when Aᵗb is the zero
    /// vector (the measurements carry no information about the pixels) or
    /// the computed spectrum is not strictly positive.
    pub fn build(system: &LinearSystem) -> HhlResult<Self> {
        let m = system.num_rays();
        let n = system.num_pixels();
        let a = DMatrix::from_row_iterator(m, n, system.matrix().iter().copied());
        let b = DVector::from_iterator(m, system.measurements().iter().copied());

        let a_h = a.transpose() * &a + DMatrix::identity(n, n);
        let b_h = a.transpose() * &b;

        let b_h_norm = b_h.norm();
        if b_h_norm < DEGENERACY_TOLERANCE {
            return Err(HhlError::DegenerateSystem {
                detail: "Aᵗb is the zero vector".into(),
            });
        }
        let b_norm = &b_h / b_h_norm;

        let eigen = SymmetricEigen::new(a_h.clone());
        let lambda_max = eigen.eigenvalues.max();
        let lambda_min = eigen.eigenvalues.min();
        if !(lambda_min > 0.0 && lambda_max.is_finite()) {
            return Err(HhlError::DegenerateSystem {
                detail: format!("spectrum not strictly positive: λ_min = {lambda_min}"),
            });
        }
        let t0 = TAU / lambda_max;
        debug!(lambda_max, lambda_min, t0, "built Hermitian surrogate");

        Ok(Self {
            a_h,
            b_h,
            b_norm,
            eigenvalues: eigen.eigenvalues,
            eigenvectors: eigen.eigenvectors,
            t0,
        })
    }

    /// The surrogate matrix A_h.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a_h
    }

    /// The surrogate right-hand side b_h = Aᵗb.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.b_h
    }

    /// b_h normalized to unit Euclidean norm.
    pub fn rhs_normalized(&self) -> &DVector<f64> {
        &self.b_norm
    }

    /// Real eigenvalues of A_h (unsorted, as decomposed).
    pub fn eigenvalues(&self) -> &DVector<f64> {
        &self.eigenvalues
    }

    /// Orthonormal eigenvectors of A_h, one per column.
    pub fn eigenvectors(&self) -> &DMatrix<f64> {
        &self.eigenvectors
    }

    /// Largest eigenvalue.
    pub fn lambda_max(&self) -> f64 {
        self.eigenvalues.max()
    }

    /// Phase-estimation time scale t0 = 2π/λ_max, chosen so every
    /// eigenvalue phase λ·t0/2π lies in (0, 1].
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Number of unknowns (dimension of A_h).
    pub fn num_pixels(&self) -> usize {
        self.a_h.nrows()
    }

    /// The same system expressed in a permuted basis: entry s of the
    /// permuted vectors corresponds to pixel `order.map(s)`.
    ///
    /// Eigenvalues are unchanged; eigenvector rows are permuted along
    /// with the matrix, so no re-decomposition is needed.
    pub fn permuted(&self, order: &PixelOrder) -> Self {
        let n = self.num_pixels();
        let a_h = DMatrix::from_fn(n, n, |s, t| self.a_h[(order.map(s), order.map(t))]);
        let b_h = DVector::from_fn(n, |s, _| self.b_h[order.map(s)]);
        let b_norm = DVector::from_fn(n, |s, _| self.b_norm[order.map(s)]);
        let eigenvectors =
            DMatrix::from_fn(n, n, |s, l| self.eigenvectors[(order.map(s), l)]);
        Self {
            a_h,
            b_h,
            b_norm,
            eigenvalues: self.eigenvalues.clone(),
            eigenvectors,
            t0: self.t0,
        }
    }
}
