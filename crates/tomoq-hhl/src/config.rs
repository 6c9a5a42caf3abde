//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use tomoq_types::PixelOrder;

use crate::error::{HhlError, HhlResult};

/// Default clock-register width.
pub const DEFAULT_CLOCK_QUBITS: usize = 5;

/// Default register-basis ordering for a 2×2 grid, inherited from the
/// upstream layout. Self-inverse, so it maps both ways.
pub const DEFAULT_PIXEL_ORDER: [usize; 4] = [3, 1, 2, 0];

/// One calibration entry: a clock bit pattern (bit k ↔ clock qubit k)
/// assumed to mark eigenvalue λ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenvalueEntry {
    /// K-bit clock pattern, least significant bit on clock qubit 0.
    pub pattern: u32,
    /// The eigenvalue assumed for that pattern; must be ≥ 1.
    pub lambda: f64,
}

impl EigenvalueEntry {
    /// Convenience constructor.
    pub fn new(pattern: u32, lambda: f64) -> Self {
        Self { pattern, lambda }
    }
}

/// What to do with clock patterns the eigenvalue table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UncoveredPolicy {
    /// Leave the ancilla at zero amplitude for those patterns; they are
    /// filtered out by postselection.
    #[default]
    Ignore,
    /// Fail with [`HhlError::UncoveredPhasePattern`] when such patterns
    /// carry non-negligible probability after phase estimation.
    Reject,
}

/// Tunable parameters of the HHL pipeline.
///
/// The defaults reproduce the reference 2×2 scenario, whose surrogate
/// spectrum {1, 3, 3, 5} with t0 = 2π/5 lands on 5-bit phases 6.4, 19.2
/// and 32 ≡ 0 — hence the three default table entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HhlConfig {
    /// Clock (phase) register width K.
    pub clock_qubits: usize,
    /// The phase→eigenvalue calibration table.
    pub eigenvalue_table: Vec<EigenvalueEntry>,
    /// Register-basis amplitude whose phase is rotated to be real and
    /// positive before reordering.
    pub reference_index: usize,
    /// Mapping from register basis index to pixel index; must be a
    /// permutation of `0..n`.
    pub pixel_order: Vec<usize>,
    /// Policy for clock patterns missing from the table.
    pub uncovered: UncoveredPolicy,
}

impl Default for HhlConfig {
    fn default() -> Self {
        Self {
            clock_qubits: DEFAULT_CLOCK_QUBITS,
            eigenvalue_table: vec![
                EigenvalueEntry::new(0b00110, 1.0),
                EigenvalueEntry::new(0b10011, 3.0),
                EigenvalueEntry::new(0b00000, 5.0),
            ],
            reference_index: 0,
            pixel_order: DEFAULT_PIXEL_ORDER.to_vec(),
            uncovered: UncoveredPolicy::Ignore,
        }
    }
}

impl HhlConfig {
    /// Validate against a system of `num_pixels` unknowns and return the
    /// checked pixel ordering. Rejects out-of-range patterns, eigenvalues
    /// below 1, bad reference indices and non-bijective orderings —
    /// everything the simulation must not discover halfway through.
    pub fn validate(&self, num_pixels: usize) -> HhlResult<PixelOrder> {
        for entry in &self.eigenvalue_table {
            if self.clock_qubits < 32 && entry.pattern >= (1 << self.clock_qubits) {
                return Err(HhlError::PatternOutOfRange {
                    pattern: entry.pattern,
                    clock_qubits: self.clock_qubits,
                });
            }
            if !(entry.lambda >= 1.0) {
                return Err(HhlError::EigenvalueTooSmall {
                    lambda: entry.lambda,
                });
            }
        }
        if self.reference_index >= num_pixels {
            return Err(HhlError::ReferenceOutOfRange {
                index: self.reference_index,
                pixels: num_pixels,
            });
        }
        if self.pixel_order.len() != num_pixels {
            return Err(HhlError::InvalidPixelOrder(
                tomoq_types::TypesError::NotAPermutation {
                    order: self.pixel_order.clone(),
                    len: num_pixels,
                },
            ));
        }
        Ok(PixelOrder::new(self.pixel_order.clone())?)
    }
}
