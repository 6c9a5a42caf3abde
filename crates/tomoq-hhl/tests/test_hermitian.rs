//! Tests for the Hermitian surrogate builder.

use ndarray::array;
use std::f64::consts::TAU;
use tomoq_hhl::{HermitianSystem, HhlError};
use tomoq_types::{LinearSystem, PixelOrder};

fn reference_system() -> LinearSystem {
    LinearSystem::new(
        array![
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ],
        array![4.0, 6.0, 3.0, 7.0],
    )
    .unwrap()
}

#[test]
fn reference_surrogate_matrix_and_rhs() {
    let hs = HermitianSystem::build(&reference_system()).unwrap();
    let expected = [
        [3.0, 1.0, 1.0, 0.0],
        [1.0, 3.0, 0.0, 1.0],
        [1.0, 0.0, 3.0, 1.0],
        [0.0, 1.0, 1.0, 3.0],
    ];
    for i in 0..4 {
        for j in 0..4 {
            assert!((hs.matrix()[(i, j)] - expected[i][j]).abs() < 1e-12);
        }
    }
    let rhs = [7.0, 9.0, 11.0, 13.0];
    for (i, expected) in rhs.iter().enumerate() {
        assert!((hs.rhs()[i] - expected).abs() < 1e-12);
    }
}

#[test]
fn reference_spectrum_is_one_three_three_five() {
    let hs = HermitianSystem::build(&reference_system()).unwrap();
    let mut eigs: Vec<f64> = hs.eigenvalues().iter().copied().collect();
    eigs.sort_by(|a, b| a.total_cmp(b));
    let expected = [1.0, 3.0, 3.0, 5.0];
    for (got, want) in eigs.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "eigenvalue {got} vs {want}");
    }
    assert!((hs.lambda_max() - 5.0).abs() < 1e-9);
    assert!((hs.t0() - TAU / 5.0).abs() < 1e-12);
}

#[test]
fn surrogate_is_symmetric_positive_definite_for_arbitrary_input() {
    let system = LinearSystem::new(
        array![[0.3, -1.2], [2.0, 0.7], [-0.5, 0.1]],
        array![1.0, -2.0, 0.5],
    )
    .unwrap();
    let hs = HermitianSystem::build(&system).unwrap();
    let a_h = hs.matrix();
    for i in 0..2 {
        for j in 0..2 {
            assert!((a_h[(i, j)] - a_h[(j, i)]).abs() < 1e-12);
        }
    }
    for eig in hs.eigenvalues().iter() {
        assert!(*eig > 0.0);
    }
}

#[test]
fn normalized_rhs_has_unit_norm() {
    let hs = HermitianSystem::build(&reference_system()).unwrap();
    assert!((hs.rhs_normalized().norm() - 1.0).abs() < 1e-12);
}

#[test]
fn zero_measurements_are_degenerate() {
    let system = LinearSystem::new(
        array![[1.0, 0.0], [0.0, 1.0]],
        array![0.0, 0.0],
    )
    .unwrap();
    assert!(matches!(
        HermitianSystem::build(&system),
        Err(HhlError::DegenerateSystem { .. })
    ));
}

#[test]
fn permuted_basis_relabels_consistently() {
    let hs = HermitianSystem::build(&reference_system()).unwrap();
    let order = PixelOrder::new(vec![3, 1, 2, 0]).unwrap();
    let permuted = hs.permuted(&order);

    // Eigenvalues are invariant under the relabeling.
    let mut eigs: Vec<f64> = permuted.eigenvalues().iter().copied().collect();
    eigs.sort_by(|a, b| a.total_cmp(b));
    for (got, want) in eigs.iter().zip([1.0, 3.0, 3.0, 5.0]) {
        assert!((got - want).abs() < 1e-9);
    }

    // Entries follow the relabeling.
    for s in 0..4 {
        assert!((permuted.rhs()[s] - hs.rhs()[order.map(s)]).abs() < 1e-12);
        for t in 0..4 {
            let expected = hs.matrix()[(order.map(s), order.map(t))];
            assert!((permuted.matrix()[(s, t)] - expected).abs() < 1e-12);
        }
    }
}
