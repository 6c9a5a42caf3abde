//! Statevector simulation engine.

use nalgebra::DMatrix;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{SimError, SimResult};

/// Tolerance for unit-norm checks on supplied amplitude vectors.
const NORM_TOLERANCE: f64 = 1e-9;

/// A statevector representing a quantum state.
///
/// Amplitudes are indexed so that qubit k is bit k of the basis index.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Statevector dimension 2^n.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Total Euclidean norm; 1 for any gate-only evolution.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    fn check_qubit(&self, qubit: usize) -> SimResult<()> {
        if qubit >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_distinct(qubits: &[usize]) -> SimResult<()> {
        for (i, &q) in qubits.iter().enumerate() {
            if qubits[..i].contains(&q) {
                return Err(SimError::DuplicateQubit { qubit: q });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Gate primitives
    // =========================================================================

    /// Apply a Hadamard gate.
    pub fn apply_h(&mut self, qubit: usize) -> SimResult<()> {
        self.check_qubit(qubit)?;
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
        Ok(())
    }

    /// Apply a Pauli-X gate.
    pub fn apply_x(&mut self, qubit: usize) -> SimResult<()> {
        self.check_qubit(qubit)?;
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
        Ok(())
    }

    /// Swap two qubits.
    pub fn apply_swap(&mut self, q1: usize, q2: usize) -> SimResult<()> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        Self::check_distinct(&[q1, q2])?;
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
        Ok(())
    }

    /// Apply a controlled phase rotation of angle `theta`.
    pub fn apply_cp(&mut self, control: usize, target: usize, theta: f64) -> SimResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        Self::check_distinct(&[control, target])?;
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
        Ok(())
    }

    /// Apply a Y-rotation to `target`, conditioned on every qubit in
    /// `controls` being |1⟩. An empty control list gives a plain Ry.
    pub fn apply_controlled_ry(
        &mut self,
        controls: &[usize],
        target: usize,
        theta: f64,
    ) -> SimResult<()> {
        self.check_qubit(target)?;
        for &c in controls {
            self.check_qubit(c)?;
        }
        let mut operands = controls.to_vec();
        operands.push(target);
        Self::check_distinct(&operands)?;

        let mut ctrl_mask = 0usize;
        for &c in controls {
            ctrl_mask |= 1 << c;
        }
        let tgt_mask = 1 << target;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask) == ctrl_mask && (i & tgt_mask) == 0 {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
        Ok(())
    }

    /// Apply a dense unitary on the subregister spanned by `targets`
    /// (target j carries sub-index bit j), optionally conditioned on a
    /// single control qubit being |1⟩.
    pub fn apply_controlled_unitary(
        &mut self,
        control: Option<usize>,
        targets: &[usize],
        unitary: &DMatrix<Complex64>,
    ) -> SimResult<()> {
        for &q in targets {
            self.check_qubit(q)?;
        }
        let mut operands = targets.to_vec();
        if let Some(c) = control {
            self.check_qubit(c)?;
            operands.push(c);
        }
        Self::check_distinct(&operands)?;

        let sub_dim = 1 << targets.len();
        if unitary.nrows() != sub_dim || unitary.ncols() != sub_dim {
            return Err(SimError::DimensionMismatch {
                expected: sub_dim,
                got: unitary.nrows(),
            });
        }

        let mut target_mask = 0usize;
        for &q in targets {
            target_mask |= 1 << q;
        }
        let ctrl_mask = control.map_or(0, |c| 1 << c);

        let mut sub = vec![Complex64::new(0.0, 0.0); sub_dim];
        let mut rotated = vec![Complex64::new(0.0, 0.0); sub_dim];
        for base in 0..self.amplitudes.len() {
            // Visit each target-subspace fiber once, via its all-zeros member.
            if base & target_mask != 0 {
                continue;
            }
            if base & ctrl_mask != ctrl_mask {
                continue;
            }
            for (s, slot) in sub.iter_mut().enumerate() {
                *slot = self.amplitudes[base | Self::scatter(s, targets)];
            }
            for (row, out) in rotated.iter_mut().enumerate() {
                let mut acc = Complex64::new(0.0, 0.0);
                for (col, value) in sub.iter().enumerate() {
                    acc += unitary[(row, col)] * value;
                }
                *out = acc;
            }
            for (s, value) in rotated.iter().enumerate() {
                self.amplitudes[base | Self::scatter(s, targets)] = *value;
            }
        }
        Ok(())
    }

    /// Spread sub-index bits onto their qubit positions.
    fn scatter(sub_index: usize, targets: &[usize]) -> usize {
        let mut index = 0;
        for (j, &q) in targets.iter().enumerate() {
            if (sub_index >> j) & 1 == 1 {
                index |= 1 << q;
            }
        }
        index
    }

    /// Collect the bits of `index` at the given qubit positions into a
    /// sub-index (qubit j → bit j).
    fn gather(index: usize, qubits: &[usize]) -> usize {
        let mut sub = 0;
        for (j, &q) in qubits.iter().enumerate() {
            if (index >> q) & 1 == 1 {
                sub |= 1 << j;
            }
        }
        sub
    }

    // =========================================================================
    // State preparation and readout
    // =========================================================================

    /// Load a normalized amplitude vector into the subregister spanned by
    /// `targets`, leaving all other qubits in |0⟩.
    ///
    /// Only valid on a fresh |0...0⟩ statevector.
    pub fn initialize(&mut self, targets: &[usize], amps: &[Complex64]) -> SimResult<()> {
        for &q in targets {
            self.check_qubit(q)?;
        }
        Self::check_distinct(targets)?;
        let sub_dim = 1 << targets.len();
        if amps.len() != sub_dim {
            return Err(SimError::DimensionMismatch {
                expected: sub_dim,
                got: amps.len(),
            });
        }
        let ground = self.amplitudes[0] == Complex64::new(1.0, 0.0)
            && self.amplitudes[1..]
                .iter()
                .all(|a| *a == Complex64::new(0.0, 0.0));
        if !ground {
            return Err(SimError::NotGroundState);
        }
        let norm = amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(SimError::NotNormalized { norm });
        }

        self.amplitudes[0] = Complex64::new(0.0, 0.0);
        for (s, amp) in amps.iter().enumerate() {
            self.amplitudes[Self::scatter(s, targets)] = *amp;
        }
        Ok(())
    }

    /// Probability of measuring `value` on a single qubit.
    pub fn probability_of(&self, qubit: usize, value: bool) -> SimResult<f64> {
        let probs = self.marginal(&[qubit])?;
        Ok(probs[usize::from(value)])
    }

    /// Marginal probability distribution over the given qubit subset.
    pub fn marginal(&self, qubits: &[usize]) -> SimResult<Vec<f64>> {
        for &q in qubits {
            self.check_qubit(q)?;
        }
        Self::check_distinct(qubits)?;
        let mut probs = vec![0.0; 1 << qubits.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            probs[Self::gather(i, qubits)] += amp.norm_sqr();
        }
        Ok(probs)
    }

    /// Projectively measure a qubit subset, collapsing the state.
    ///
    /// Returns the sampled outcome, bit j for `qubits[j]`.
    pub fn measure(&mut self, qubits: &[usize]) -> SimResult<Vec<bool>> {
        use rand::Rng;
        let probs = self.marginal(qubits)?;

        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        let mut outcome = probs.len() - 1;
        for (pattern, p) in probs.iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                outcome = pattern;
                break;
            }
        }
        debug!(?qubits, outcome, "projective measurement");

        // Collapse and renormalize.
        let mut norm_sq = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if Self::gather(i, qubits) != outcome {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                norm_sq += amp.norm_sqr();
            }
        }
        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }

        Ok((0..qubits.len()).map(|j| (outcome >> j) & 1 == 1).collect())
    }

    /// Unnormalized amplitudes of the `register` subspace where `ancilla`
    /// is |1⟩, amplitude-summed over every other qubit.
    pub fn postselected(&self, register: &[usize], ancilla: usize) -> SimResult<Vec<Complex64>> {
        for &q in register {
            self.check_qubit(q)?;
        }
        self.check_qubit(ancilla)?;
        let mut operands = register.to_vec();
        operands.push(ancilla);
        Self::check_distinct(&operands)?;

        let anc_mask = 1 << ancilla;
        let mut out = vec![Complex64::new(0.0, 0.0); 1 << register.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if i & anc_mask != 0 {
                out[Self::gather(i, register)] += amp;
            }
        }
        Ok(out)
    }
}
