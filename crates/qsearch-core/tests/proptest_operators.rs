//! Property-based tests for the search operators.

use proptest::prelude::*;

use qsearch_core::{DiffusionOperator, HadamardOperator, StateVector, oracle};

/// A random state of dimension `2^k` for `k` in `0..=5`.
fn arb_state() -> impl Strategy<Value = StateVector> {
    (0_u32..=5).prop_flat_map(|k| {
        prop::collection::vec(-10.0_f64..10.0, 1_usize << k).prop_map(StateVector::from_amplitudes)
    })
}

/// A pair of random states sharing a dimension.
fn arb_state_pair() -> impl Strategy<Value = (StateVector, StateVector)> {
    (0_u32..=5).prop_flat_map(|k| {
        let n = 1_usize << k;
        (
            prop::collection::vec(-10.0_f64..10.0, n).prop_map(StateVector::from_amplitudes),
            prop::collection::vec(-10.0_f64..10.0, n).prop_map(StateVector::from_amplitudes),
        )
    })
}

proptest! {
    /// H · H · psi = psi for every power-of-two dimension.
    #[test]
    fn hadamard_is_an_involution(psi in arb_state()) {
        let h = HadamardOperator::new(psi.dim()).unwrap();
        let back = h.apply(&h.apply(&psi).unwrap()).unwrap();
        for (a, b) in psi.to_vec().iter().zip(back.to_vec()) {
            prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    /// Normalising any non-zero state yields probabilities that sum to one.
    #[test]
    fn probability_is_conserved(psi in arb_state()) {
        prop_assume!(psi.norm() > 1e-6);
        let total: f64 = psi.normalized().unwrap().probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    /// Oracle and diffusion are pure: repeated calls are bit-identical.
    #[test]
    fn oracle_and_diffusion_are_deterministic((psi, target) in arb_state_pair()) {
        let first = oracle(&psi, &target).unwrap();
        prop_assert_eq!(&first, &oracle(&psi, &target).unwrap());

        let d = DiffusionOperator::new(target.clone());
        let g = d.apply(&psi).unwrap();
        prop_assert_eq!(g, d.apply(&psi).unwrap());
    }
}
