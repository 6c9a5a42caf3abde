//! Quantum Fourier transform over a qubit subset.
//!
//! Convention (fixed — phase estimation depends on it): local qubit 0 of
//! the slice is the least significant bit of the transformed integer. The
//! forward transform applies the bit-reversal swaps first, then for each
//! local qubit j ascending a Hadamard followed by controlled phases of
//! angle π/2^(k−j) from every higher local qubit k. The inverse reverses
//! the gate order, negates every angle and applies the swaps last.
//!
//! On basis state |m⟩ the forward transform produces
//! (1/√2^K) Σ_x e^{2πi·m·x/2^K} |x⟩.

use std::f64::consts::PI;

use crate::error::SimResult;
use crate::statevector::Statevector;

/// Apply the QFT to the given qubits (least significant first).
pub fn apply_qft(sv: &mut Statevector, qubits: &[usize]) -> SimResult<()> {
    let n = qubits.len();
    for i in 0..n / 2 {
        sv.apply_swap(qubits[i], qubits[n - 1 - i])?;
    }
    for j in 0..n {
        sv.apply_h(qubits[j])?;
        for k in j + 1..n {
            sv.apply_cp(qubits[k], qubits[j], PI / (1 << (k - j)) as f64)?;
        }
    }
    Ok(())
}

/// Apply the inverse QFT to the given qubits (least significant first).
pub fn apply_inverse_qft(sv: &mut Statevector, qubits: &[usize]) -> SimResult<()> {
    let n = qubits.len();
    for j in (0..n).rev() {
        for k in (j + 1..n).rev() {
            sv.apply_cp(qubits[k], qubits[j], -PI / (1 << (k - j)) as f64)?;
        }
        sv.apply_h(qubits[j])?;
    }
    for i in 0..n / 2 {
        sv.apply_swap(qubits[i], qubits[n - 1 - i])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn prepare_basis_state(num_qubits: usize, m: usize) -> Statevector {
        let mut sv = Statevector::new(num_qubits);
        for q in 0..num_qubits {
            if (m >> q) & 1 == 1 {
                sv.apply_x(q).unwrap();
            }
        }
        sv
    }

    #[test]
    fn qft_of_zero_is_uniform() {
        let mut sv = Statevector::new(3);
        apply_qft(&mut sv, &[0, 1, 2]).unwrap();
        let expected = Complex64::new(1.0 / 8.0_f64.sqrt(), 0.0);
        for amp in sv.amplitudes() {
            assert!((amp - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn qft_of_basis_state_has_expected_phases() {
        let m = 5;
        let mut sv = prepare_basis_state(3, m);
        apply_qft(&mut sv, &[0, 1, 2]).unwrap();
        let scale = 1.0 / 8.0_f64.sqrt();
        for (x, amp) in sv.amplitudes().iter().enumerate() {
            let angle = 2.0 * PI * (m * x) as f64 / 8.0;
            let expected = Complex64::from_polar(scale, angle);
            assert!((amp - expected).norm() < 1e-12, "mismatch at x={x}");
        }
    }

    #[test]
    fn qft_round_trips_any_state() {
        // Build a non-trivial state with a few gates, copy it, transform
        // forward and back, compare.
        let mut sv = Statevector::new(4);
        sv.apply_h(0).unwrap();
        sv.apply_cp(0, 2, 0.91).unwrap();
        sv.apply_controlled_ry(&[0], 3, 1.1).unwrap();
        sv.apply_h(2).unwrap();
        let before: Vec<Complex64> = sv.amplitudes().to_vec();

        apply_qft(&mut sv, &[0, 1, 2, 3]).unwrap();
        apply_inverse_qft(&mut sv, &[0, 1, 2, 3]).unwrap();

        for (a, b) in sv.amplitudes().iter().zip(&before) {
            assert!((a - b).norm() < 1e-10);
        }
    }

    #[test]
    fn inverse_qft_round_trips_in_other_order() {
        let mut sv = Statevector::new(3);
        sv.apply_h(1).unwrap();
        sv.apply_cp(1, 0, 0.4).unwrap();
        let before: Vec<Complex64> = sv.amplitudes().to_vec();

        apply_inverse_qft(&mut sv, &[0, 1, 2]).unwrap();
        apply_qft(&mut sv, &[0, 1, 2]).unwrap();

        for (a, b) in sv.amplitudes().iter().zip(&before) {
            assert!((a - b).norm() < 1e-10);
        }
    }

    #[test]
    fn qft_on_register_subset_leaves_rest_alone() {
        // Qubit 2 stays |1⟩ while the QFT acts on qubits 0..1.
        let mut sv = Statevector::new(3);
        sv.apply_x(2).unwrap();
        apply_qft(&mut sv, &[0, 1]).unwrap();
        let marginal = sv.marginal(&[2]).unwrap();
        assert!((marginal[1] - 1.0).abs() < 1e-12);
    }
}
