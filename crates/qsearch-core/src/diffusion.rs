//! Amplitude amplification step.
//!
//! ```text
//!   G(psi) = ((2^(k-2) - 1) / 2^(k-2)) · psi + (2 / sqrt(2^k)) · r
//! ```
//!
//! where `r` is the reference vector built from the target register and `k`
//! is that reference's dimension. The weights are evaluated as
//! `1 - 2^-(k-2)` and `2^(1 - k/2)` so large registers stay finite.
//! No normalisation happens here.

use crate::error::SimResult;
use crate::state::StateVector;

/// Diffusion operator bound to a target reference vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionOperator {
    reference: StateVector,
}

impl DiffusionOperator {
    /// Bind the operator to the target reference vector.
    pub fn new(reference: StateVector) -> Self {
        Self { reference }
    }

    /// The reference vector added on every application.
    pub fn reference(&self) -> &StateVector {
        &self.reference
    }

    /// Exponent `k`: the reference register's dimension.
    pub fn exponent(&self) -> usize {
        self.reference.dim()
    }

    /// Coefficient on `psi`, `(2^(k-2) - 1) / 2^(k-2)`.
    pub fn psi_weight(&self) -> f64 {
        let k = self.exponent() as f64;
        1.0 - 2.0_f64.powf(-(k - 2.0))
    }

    /// Coefficient on the reference, `2 / sqrt(2^k)`.
    pub fn reference_weight(&self) -> f64 {
        let k = self.exponent() as f64;
        2.0_f64.powf(1.0 - k / 2.0)
    }

    /// Compute `G(psi)` as a new state.
    pub fn apply(&self, psi: &StateVector) -> SimResult<StateVector> {
        psi.scaled(self.psi_weight())
            .try_add(&self.reference.scaled(self.reference_weight()))
    }
}

/// Free-standing form of [`DiffusionOperator::apply`].
pub fn diffuse(psi: &StateVector, reference: &StateVector) -> SimResult<StateVector> {
    DiffusionOperator::new(reference.clone()).apply(psi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn direct_weights(k: i32) -> (f64, f64) {
        let p = 2.0_f64.powi(k - 2);
        ((p - 1.0) / p, 2.0 / 2.0_f64.powi(k).sqrt())
    }

    #[test]
    fn test_weights_match_closed_form() {
        for k in [1, 2, 3, 4, 8, 16, 32] {
            let d = DiffusionOperator::new(StateVector::zeros(k as usize));
            let (a, b) = direct_weights(k);
            assert!((d.psi_weight() - a).abs() < 1e-12, "k = {k}");
            assert!((d.reference_weight() - b).abs() < 1e-12, "k = {k}");
        }
    }

    #[test]
    fn test_weights_finite_for_large_register() {
        let d = DiffusionOperator::new(StateVector::zeros(4096));
        assert!(d.psi_weight().is_finite());
        assert!((d.psi_weight() - 1.0).abs() < 1e-12);
        assert_eq!(d.reference_weight(), 0.0);
    }

    #[test]
    fn test_apply_dim16() {
        let mut r = vec![0.0; 16];
        r[8] = 1.0;
        let psi = StateVector::from_amplitudes(vec![0.25; 16]);
        let out = diffuse(&psi, &StateVector::from_amplitudes(r)).unwrap();
        let a = 1.0 - 1.0 / 16384.0;
        let b = 2.0 / 256.0;
        for i in 0..16 {
            let expected = 0.25 * a + if i == 8 { b } else { 0.0 };
            assert!((out.amplitude(i).unwrap() - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let d = DiffusionOperator::new(StateVector::zeros(8));
        assert_eq!(
            d.apply(&StateVector::zeros(4)),
            Err(SimError::DimensionMismatch {
                expected: 4,
                found: 8
            })
        );
    }
}
