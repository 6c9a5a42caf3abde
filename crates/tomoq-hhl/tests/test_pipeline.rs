//! End-to-end tests for the HHL pipeline.

use ndarray::array;
use num_complex::Complex64;
use tomoq_hhl::{
    EigenvalueEntry, EvolutionBank, HermitianSystem, HhlConfig, HhlError, HhlPipeline,
    UncoveredPolicy,
};
use tomoq_sim::qft::apply_inverse_qft;
use tomoq_sim::{RegisterLayout, Statevector};
use tomoq_types::LinearSystem;

/// The 2×2 phantom [[1,2],[3,4]] projected at 0° and 90°.
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

/// A 2-pixel system whose surrogate is diag(2, 4): both eigenvalue
/// phases are exact 3-bit fractions, so the table inversion is exact.
fn exact_phase_system() -> LinearSystem {
    LinearSystem::new(
        array![[1.0, 0.0], [0.0, 3.0_f64.sqrt()]],
        array![0.6, 0.8 / 3.0_f64.sqrt()],
    )
    .unwrap()
}

fn exact_phase_config() -> HhlConfig {
    HhlConfig {
        clock_qubits: 3,
        eigenvalue_table: vec![
            EigenvalueEntry::new(0b100, 2.0),
            EigenvalueEntry::new(0b000, 4.0),
        ],
        reference_index: 0,
        pixel_order: vec![0, 1],
        uncovered: UncoveredPolicy::Ignore,
    }
}

// ---------------------------------------------------------------------------
// Phase-estimation bit order
// ---------------------------------------------------------------------------

#[test]
fn phase_estimation_peaks_at_expected_pattern() {
    // b_norm = (1, 0) is the eigenvector of diag(2, 4) with λ = 2, whose
    // phase 2/4 = 0.5 is the exact 3-bit pattern 0b100.
    let system = LinearSystem::new(
        array![[1.0, 0.0], [0.0, 3.0_f64.sqrt()]],
        array![1.0, 0.0],
    )
    .unwrap();
    let hs = HermitianSystem::build(&system).unwrap();
    let bank = EvolutionBank::build(&hs, 3).unwrap();
    let layout = RegisterLayout::new(1, 3);
    let mut sv = Statevector::new(layout.total_qubits());

    let amps: Vec<Complex64> = hs
        .rhs_normalized()
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    sv.initialize(layout.system(), &amps).unwrap();
    for &q in layout.clock() {
        sv.apply_h(q).unwrap();
    }
    for k in 0..bank.len() {
        sv.apply_controlled_unitary(Some(layout.clock()[k]), layout.system(), bank.forward(k))
            .unwrap();
    }
    apply_inverse_qft(&mut sv, layout.clock()).unwrap();

    let marginal = sv.marginal(layout.clock()).unwrap();
    assert!(
        (marginal[0b100] - 1.0).abs() < 1e-10,
        "clock distribution {marginal:?}"
    );
}

// ---------------------------------------------------------------------------
// End-to-end reconstruction
// ---------------------------------------------------------------------------

#[test]
fn exact_phase_system_inverts_exactly() {
    let outcome = HhlPipeline::new(exact_phase_config())
        .run(&exact_phase_system())
        .unwrap();
    // Normalized diag(2,4)⁻¹ · (0.6, 0.8) = (0.3, 0.2)/‖·‖.
    assert!((outcome.pixels[0] - 0.832_050_29).abs() < 1e-6);
    assert!((outcome.pixels[1] - 0.554_700_20).abs() < 1e-6);
    assert!((outcome.postselect_probability - 0.13).abs() < 1e-6);
}

#[test]
fn reference_scenario_with_default_config() {
    let outcome = HhlPipeline::with_defaults().run(&reference_system()).unwrap();
    // Pinned from the ideal simulation of the default calibration table.
    let expected = [
        0.255_200_429_756,
        0.394_625_410_677,
        0.534_050_391_597,
        0.673_475_372_518,
    ];
    for (got, want) in outcome.pixels.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "pixel {got} vs {want}");
    }
    assert!((outcome.postselect_probability - 0.042_881_334).abs() < 1e-6);
}

#[test]
fn identity_pixel_order_changes_only_the_phase_reference() {
    // With the identity ordering the register basis is the pixel basis;
    // the run still succeeds and yields a unit-norm result.
    let config = HhlConfig {
        pixel_order: vec![0, 1, 2, 3],
        ..HhlConfig::default()
    };
    let outcome = HhlPipeline::new(config).run(&reference_system()).unwrap();
    let norm_sq: f64 = outcome.pixels.iter().map(|v| v * v).sum();
    assert!(norm_sq <= 1.0 + 1e-9);
    assert!((outcome.postselect_probability - 0.042_881_334).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn empty_table_fails_postselection() {
    let config = HhlConfig {
        eigenvalue_table: vec![],
        ..HhlConfig::default()
    };
    assert!(matches!(
        HhlPipeline::new(config).run(&reference_system()),
        Err(HhlError::FailedPostselection { .. })
    ));
}

#[test]
fn reject_policy_flags_uncovered_patterns() {
    // Only the λ = 5 pattern is listed; the λ = 3 components spread
    // around pattern 19 and must trip the reject policy.
    let config = HhlConfig {
        eigenvalue_table: vec![EigenvalueEntry::new(0b00000, 5.0)],
        uncovered: UncoveredPolicy::Reject,
        ..HhlConfig::default()
    };
    assert!(matches!(
        HhlPipeline::new(config).run(&reference_system()),
        Err(HhlError::UncoveredPhasePattern { .. })
    ));
}

#[test]
fn ignore_policy_accepts_uncovered_patterns() {
    let config = HhlConfig {
        eigenvalue_table: vec![EigenvalueEntry::new(0b00000, 5.0)],
        uncovered: UncoveredPolicy::Ignore,
        ..HhlConfig::default()
    };
    assert!(HhlPipeline::new(config).run(&reference_system()).is_ok());
}

#[test]
fn non_power_of_two_system_rejected() {
    let system = LinearSystem::new(
        array![[1.0, 0.0, 1.0], [0.0, 1.0, 0.0]],
        array![1.0, 2.0],
    )
    .unwrap();
    assert!(matches!(
        HhlPipeline::with_defaults().run(&system),
        Err(HhlError::DimensionNotPowerOfTwo { pixels: 3 })
    ));
}

#[test]
fn mismatched_pixel_order_rejected() {
    let config = HhlConfig {
        pixel_order: vec![0, 1],
        ..HhlConfig::default()
    };
    assert!(matches!(
        HhlPipeline::new(config).run(&reference_system()),
        Err(HhlError::InvalidPixelOrder(_))
    ));
}
