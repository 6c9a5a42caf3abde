//! The projection linear system Ax = b.

use ndarray::{Array1, Array2};

use crate::error::{TypesError, TypesResult};

/// A dense projection system: matrix A (rays × pixels) and measured line
/// integrals b.
///
/// Immutable once built; the constructor rejects shape mismatches and
/// non-finite entries so downstream solvers can assume a well-formed
/// system.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Array2<f64>,
    b: Array1<f64>,
}

impl LinearSystem {
    /// Build a system from a projection matrix and measurement vector.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> TypesResult<Self> {
        if a.nrows() != b.len() {
            return Err(TypesError::RowCountMismatch {
                rows: a.nrows(),
                measurements: b.len(),
            });
        }
        if a.iter().any(|v| !v.is_finite()) {
            return Err(TypesError::NonFiniteEntry {
                location: "projection matrix",
            });
        }
        if b.iter().any(|v| !v.is_finite()) {
            return Err(TypesError::NonFiniteEntry {
                location: "measurement vector",
            });
        }
        Ok(Self { a, b })
    }

    /// The projection matrix A.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.a
    }

    /// The measurement vector b.
    pub fn measurements(&self) -> &Array1<f64> {
        &self.b
    }

    /// Number of rays (matrix rows).
    pub fn num_rays(&self) -> usize {
        self.a.nrows()
    }

    /// Number of pixels (matrix columns, unknowns).
    pub fn num_pixels(&self) -> usize {
        self.a.ncols()
    }
}
