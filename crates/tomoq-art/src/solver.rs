//! Cyclic row-relaxation solver.

use ndarray::{Array1, Axis};
use tracing::debug;

use tomoq_types::LinearSystem;

use crate::error::{ArtError, ArtResult};

/// Default number of full sweeps over the rows.
pub const DEFAULT_SWEEPS: usize = 10;
/// Default relaxation factor ω.
pub const DEFAULT_RELAXATION: f64 = 1.0;

/// ART (Kaczmarz) solver configuration.
///
/// Starting from x = 0, each sweep visits every row i in ascending order
/// and applies
///
///   x ← x + ω · (bᵢ − aᵢ·x) / ‖aᵢ‖² · aᵢ
///
/// Rows with zero norm are skipped. On a consistent system with ω = 1 and
/// enough sweeps this converges to the minimum-norm solution.
#[derive(Debug, Clone, Copy)]
pub struct Art {
    sweeps: usize,
    relaxation: f64,
}

impl Default for Art {
    fn default() -> Self {
        Self {
            sweeps: DEFAULT_SWEEPS,
            relaxation: DEFAULT_RELAXATION,
        }
    }
}

impl Art {
    /// Construct a solver with an explicit sweep count and relaxation
    /// factor ω ∈ (0, 2].
    pub fn new(sweeps: usize, relaxation: f64) -> ArtResult<Self> {
        if sweeps == 0 {
            return Err(ArtError::InvalidSweeps(0));
        }
        if !(relaxation > 0.0 && relaxation <= 2.0) {
            return Err(ArtError::InvalidRelaxation(relaxation));
        }
        Ok(Self { sweeps, relaxation })
    }

    /// Number of sweeps this solver will run.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Relaxation factor ω.
    pub fn relaxation(&self) -> f64 {
        self.relaxation
    }

    /// Run the fixed number of sweeps and return the estimate.
    ///
    /// Pure numeric loop: no failure modes beyond what construction
    /// already rejected, and no shared state.
    pub fn solve(&self, system: &LinearSystem) -> Array1<f64> {
        let a = system.matrix();
        let b = system.measurements();
        let mut x = Array1::<f64>::zeros(system.num_pixels());

        debug!(
            sweeps = self.sweeps,
            relaxation = self.relaxation,
            rays = system.num_rays(),
            pixels = system.num_pixels(),
            "running ART sweeps"
        );

        for _ in 0..self.sweeps {
            for (i, row) in a.axis_iter(Axis(0)).enumerate() {
                let norm_sq = row.dot(&row);
                if norm_sq == 0.0 {
                    continue;
                }
                let residual = b[i] - row.dot(&x);
                let scale = self.relaxation * residual / norm_sq;
                x.scaled_add(scale, &row);
            }
        }
        x
    }
}
