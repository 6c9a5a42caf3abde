//! Named qubit groups for a matrix-inversion run.

/// Fixed register layout: system qubits first, then clock qubits, then a
/// single ancilla as the most significant qubit.
///
/// System sub-index bit j lives on system qubit j, so the system register
/// enumerates the solution basis in natural binary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterLayout {
    system: Vec<usize>,
    clock: Vec<usize>,
    ancilla: usize,
}

impl RegisterLayout {
    /// Lay out `num_system` system qubits and `num_clock` clock qubits.
    pub fn new(num_system: usize, num_clock: usize) -> Self {
        let system = (0..num_system).collect();
        let clock = (num_system..num_system + num_clock).collect();
        Self {
            system,
            clock,
            ancilla: num_system + num_clock,
        }
    }

    /// System register qubit indices, least significant first.
    pub fn system(&self) -> &[usize] {
        &self.system
    }

    /// Clock register qubit indices, least significant first.
    pub fn clock(&self) -> &[usize] {
        &self.clock
    }

    /// The rotation ancilla qubit index.
    pub fn ancilla(&self) -> usize {
        self.ancilla
    }

    /// Total qubit count: system + clock + ancilla.
    pub fn total_qubits(&self) -> usize {
        self.system.len() + self.clock.len() + 1
    }

    /// Statevector dimension 2^total.
    pub fn dimension(&self) -> usize {
        1 << self.total_qubits()
    }
}
