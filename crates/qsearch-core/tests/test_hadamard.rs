//! Tests for the Hadamard transform.

use qsearch_core::{HadamardOperator, SimError, StateVector, hadamard};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_is_orthonormal() {
    for n in [1, 2, 4, 8, 16, 32] {
        let h = HadamardOperator::new(n).unwrap();
        let product = h.matrix().dot(h.matrix());
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product[[i, j]] - expected).abs() < 1e-12,
                    "H·H[{i},{j}] = {} for n = {n}",
                    product[[i, j]]
                );
            }
        }
    }
}

#[test]
fn matrix_is_symmetric() {
    let h = HadamardOperator::new(16).unwrap();
    assert_eq!(h.matrix(), &h.matrix().t());
}

#[test]
fn dimension_is_reported() {
    assert_eq!(HadamardOperator::new(64).unwrap().dim(), 64);
}

#[test]
fn non_powers_of_two_fail_fast() {
    for n in [0, 3, 5, 6, 12, 100] {
        assert_eq!(
            HadamardOperator::new(n).unwrap_err(),
            SimError::NotPowerOfTwo(n)
        );
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

#[test]
fn applying_twice_restores_state() {
    let psi = StateVector::from_amplitudes(vec![0.1, -0.3, 0.7, 0.0, 0.2, -0.5, 0.05, 0.4]);
    let back = hadamard(&hadamard(&psi).unwrap()).unwrap();
    for (a, b) in psi.to_vec().iter().zip(back.to_vec()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn preserves_norm() {
    let psi = StateVector::from_amplitudes(vec![3.0, 1.0, -2.0, 0.5]);
    let out = hadamard(&psi).unwrap();
    assert!((out.norm_sqr() - psi.norm_sqr()).abs() < 1e-12);
}

#[test]
fn uniform_state_maps_to_zero_basis_vector() {
    let psi = StateVector::from_amplitudes(vec![0.25; 16]);
    let out = hadamard(&psi).unwrap();
    assert!((out.amplitude(0).unwrap() - 1.0).abs() < 1e-12);
    for i in 1..16 {
        assert!(out.amplitude(i).unwrap().abs() < 1e-12);
    }
}

#[test]
fn free_function_rejects_non_power_of_two_vector() {
    let psi = StateVector::zeros(6);
    assert_eq!(hadamard(&psi), Err(SimError::NotPowerOfTwo(6)));
}
