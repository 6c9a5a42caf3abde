//! The HHL stage pipeline.
//!
//! Stages run strictly in sequence over one owned statevector:
//! state preparation → phase estimation → eigenvalue inversion →
//! inverse phase estimation → postselected extraction. There is no
//! branching and no retry; a failed stage aborts the run with the
//! corresponding error.

use num_complex::Complex64;
use tracing::debug;

use tomoq_sim::qft;
use tomoq_sim::{RegisterLayout, Statevector};
use tomoq_types::LinearSystem;

use crate::config::{HhlConfig, UncoveredPolicy};
use crate::error::{HhlError, HhlResult};
use crate::evolution::EvolutionBank;
use crate::hermitian::HermitianSystem;

/// Postselected norms below this raise [`HhlError::FailedPostselection`].
const POSTSELECTION_TOLERANCE: f64 = 1e-9;

/// Reference amplitudes below this fall back to the largest component
/// for global-phase fixing.
const PHASE_REFERENCE_TOLERANCE: f64 = 1e-12;

/// Probability mass tolerated on uncovered clock patterns under
/// [`UncoveredPolicy::Reject`].
const UNCOVERED_MASS_TOLERANCE: f64 = 1e-9;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Reconstructed unit-norm solution, row-major pixel order.
    pub pixels: Vec<f64>,
    /// Probability of the ancilla measuring 1 (the postselection
    /// acceptance rate a physical run would see).
    pub postselect_probability: f64,
}

/// Orchestrates one HHL run per call; owns no state between runs.
#[derive(Debug, Clone, Default)]
pub struct HhlPipeline {
    config: HhlConfig,
}

impl HhlPipeline {
    /// Build a pipeline with an explicit configuration.
    pub fn new(config: HhlConfig) -> Self {
        Self { config }
    }

    /// Build a pipeline with the reference-scenario defaults.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration.
    pub fn config(&self) -> &HhlConfig {
        &self.config
    }

    /// Build the Hermitian surrogate for `system` and run the circuit.
    pub fn run(&self, system: &LinearSystem) -> HhlResult<Reconstruction> {
        let hermitian = HermitianSystem::build(system)?;
        self.run_hermitian(&hermitian)
    }

    /// Run the circuit against an already-built surrogate system.
    pub fn run_hermitian(&self, hermitian: &HermitianSystem) -> HhlResult<Reconstruction> {
        let n = hermitian.num_pixels();
        if n < 2 || !n.is_power_of_two() {
            return Err(HhlError::DimensionNotPowerOfTwo { pixels: n });
        }
        let num_system = n.trailing_zeros() as usize;
        let order = self.config.validate(n)?;
        let clock_qubits = self.config.clock_qubits;

        // Everything below works in the register basis; `order` maps
        // register index → pixel index.
        let register_basis = hermitian.permuted(&order);
        let bank = EvolutionBank::build(&register_basis, clock_qubits)?;
        let layout = RegisterLayout::new(num_system, clock_qubits);
        let mut sv = Statevector::new(layout.total_qubits());

        debug!(
            pixels = n,
            clock_qubits,
            total_qubits = layout.total_qubits(),
            "starting HHL run"
        );

        self.prepare_state(&mut sv, &layout, &register_basis)?;
        self.phase_estimate(&mut sv, &layout, &bank)?;
        self.check_uncovered(&sv, &layout)?;
        self.invert_eigenvalues(&mut sv, &layout)?;
        self.uncompute_phase_estimate(&mut sv, &layout, &bank)?;
        self.extract(&sv, &layout, &order)
    }

    /// STATE_PREP: load the normalized right-hand side into the system
    /// register.
    fn prepare_state(
        &self,
        sv: &mut Statevector,
        layout: &RegisterLayout,
        register_basis: &HermitianSystem,
    ) -> HhlResult<()> {
        let amps: Vec<Complex64> = register_basis
            .rhs_normalized()
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .collect();
        sv.initialize(layout.system(), &amps)?;
        debug!("state prepared");
        Ok(())
    }

    /// PHASE_ESTIMATE: Hadamards, controlled dyadic evolutions, inverse
    /// QFT. Leaves the clock register holding a K-bit binary fraction
    /// approximating each eigencomponent's phase λ·t0/2π.
    fn phase_estimate(
        &self,
        sv: &mut Statevector,
        layout: &RegisterLayout,
        bank: &EvolutionBank,
    ) -> HhlResult<()> {
        for &q in layout.clock() {
            sv.apply_h(q)?;
        }
        for k in 0..bank.len() {
            sv.apply_controlled_unitary(Some(layout.clock()[k]), layout.system(), bank.forward(k))?;
        }
        qft::apply_inverse_qft(sv, layout.clock())?;
        debug!("phase estimation done");
        Ok(())
    }

    /// Reject-policy check: probability mass on clock patterns the table
    /// does not list.
    fn check_uncovered(&self, sv: &Statevector, layout: &RegisterLayout) -> HhlResult<()> {
        if self.config.uncovered != UncoveredPolicy::Reject {
            return Ok(());
        }
        let marginal = sv.marginal(layout.clock())?;
        let mass: f64 = marginal
            .iter()
            .enumerate()
            .filter(|(pattern, _)| {
                !self
                    .config
                    .eigenvalue_table
                    .iter()
                    .any(|entry| entry.pattern as usize == *pattern)
            })
            .map(|(_, p)| p)
            .sum();
        if mass > UNCOVERED_MASS_TOLERANCE {
            return Err(HhlError::UncoveredPhasePattern { mass });
        }
        Ok(())
    }

    /// EIGENVALUE_INVERT: per table entry, map "clock equals pattern"
    /// onto "all clock qubits are 1" with X gates, rotate the ancilla by
    /// θ = 2·arcsin(1/λ), undo the X gates. Encodes amplitude ∝ 1/λ on
    /// the ancilla for exactly the listed patterns.
    fn invert_eigenvalues(&self, sv: &mut Statevector, layout: &RegisterLayout) -> HhlResult<()> {
        for entry in &self.config.eigenvalue_table {
            let theta = 2.0 * (1.0 / entry.lambda).asin();
            let zero_bits: Vec<usize> = layout
                .clock()
                .iter()
                .enumerate()
                .filter(|(j, _)| (entry.pattern >> j) & 1 == 0)
                .map(|(_, &q)| q)
                .collect();
            for &q in &zero_bits {
                sv.apply_x(q)?;
            }
            sv.apply_controlled_ry(layout.clock(), layout.ancilla(), theta)?;
            for &q in &zero_bits {
                sv.apply_x(q)?;
            }
        }
        debug!(
            entries = self.config.eigenvalue_table.len(),
            "eigenvalue inversion done"
        );
        Ok(())
    }

    /// INV_PHASE_ESTIMATE: the strict inverse of the forward stage —
    /// QFT, controlled inverse evolutions in descending order, then the
    /// Hadamard layer, returning the clock register toward |0…0⟩.
    fn uncompute_phase_estimate(
        &self,
        sv: &mut Statevector,
        layout: &RegisterLayout,
        bank: &EvolutionBank,
    ) -> HhlResult<()> {
        qft::apply_qft(sv, layout.clock())?;
        for k in (0..bank.len()).rev() {
            sv.apply_controlled_unitary(
                Some(layout.clock()[k]),
                layout.system(),
                &bank.inverse(k),
            )?;
        }
        for &q in layout.clock() {
            sv.apply_h(q)?;
        }
        debug!("phase estimation uncomputed");
        Ok(())
    }

    /// POSTSELECT_EXTRACT: keep the ancilla=1 subspace, amplitude-sum
    /// over the clock register, renormalize, fix the global phase on the
    /// reference amplitude, reorder to pixel basis and take real parts.
    fn extract(
        &self,
        sv: &Statevector,
        layout: &RegisterLayout,
        order: &tomoq_types::PixelOrder,
    ) -> HhlResult<Reconstruction> {
        let raw = sv.postselected(layout.system(), layout.ancilla())?;
        let norm = raw.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if norm < POSTSELECTION_TOLERANCE {
            return Err(HhlError::FailedPostselection { norm });
        }
        let mut amplitudes: Vec<Complex64> = raw.iter().map(|a| a / norm).collect();

        let mut reference = amplitudes[self.config.reference_index];
        if reference.norm() < PHASE_REFERENCE_TOLERANCE {
            // Degenerate reference; fall back to the largest component.
            for a in &amplitudes {
                if a.norm() > reference.norm() {
                    reference = *a;
                }
            }
        }
        let phase = reference / reference.norm();
        for a in &mut amplitudes {
            *a /= phase;
        }

        let register_values: Vec<f64> = amplitudes.iter().map(|a| a.re).collect();
        let pixels = order.inverse().apply(&register_values);
        debug!(postselect_probability = norm * norm, "extraction done");
        Ok(Reconstruction {
            pixels,
            postselect_probability: norm * norm,
        })
    }
}
