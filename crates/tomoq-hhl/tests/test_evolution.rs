//! Tests for the precomputed evolution operators.

use nalgebra::DMatrix;
use ndarray::array;
use num_complex::Complex64;
use tomoq_hhl::{EvolutionBank, HermitianSystem};
use tomoq_types::LinearSystem;

fn reference_bank(clock_qubits: usize) -> EvolutionBank {
    let system = LinearSystem::new(
        array![
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ],
        array![4.0, 6.0, 3.0, 7.0],
    )
    .unwrap();
    let hs = HermitianSystem::build(&system).unwrap();
    EvolutionBank::build(&hs, clock_qubits).unwrap()
}

fn max_deviation_from_identity(m: &DMatrix<Complex64>) -> f64 {
    let n = m.nrows();
    let mut worst = 0.0_f64;
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
            worst = worst.max((m[(i, j)] - expected).norm());
        }
    }
    worst
}

#[test]
fn one_operator_per_clock_qubit() {
    let bank = reference_bank(5);
    assert_eq!(bank.len(), 5);
    assert!(!bank.is_empty());
}

#[test]
fn every_operator_is_unitary() {
    let bank = reference_bank(5);
    for k in 0..bank.len() {
        let u = bank.forward(k);
        let product = u.adjoint() * u;
        assert!(
            max_deviation_from_identity(&product) < 1e-10,
            "operator {k} is not unitary"
        );
    }
}

#[test]
fn inverse_is_the_adjoint() {
    let bank = reference_bank(4);
    for k in 0..bank.len() {
        let product = bank.forward(k) * bank.inverse(k);
        assert!(
            max_deviation_from_identity(&product) < 1e-10,
            "inverse {k} does not cancel the forward evolution"
        );
    }
}

#[test]
fn doubling_time_squares_the_operator() {
    // U_{k+1} = U_k², the dyadic scaling phase estimation relies on.
    let bank = reference_bank(3);
    for k in 0..bank.len() - 1 {
        let squared = bank.forward(k) * bank.forward(k);
        let next = bank.forward(k + 1);
        let mut worst = 0.0_f64;
        for i in 0..squared.nrows() {
            for j in 0..squared.ncols() {
                worst = worst.max((squared[(i, j)] - next[(i, j)]).norm());
            }
        }
        assert!(worst < 1e-10, "U_{}² differs from U_{}", k, k + 1);
    }
}
