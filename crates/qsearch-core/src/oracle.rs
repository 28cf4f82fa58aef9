//! Phase-flip oracle.
//!
//! The oracle combines a state with its comparison target amplitude by
//! amplitude. Each pair `(i, j)` maps to `i * j`, negated when the two
//! operands carry the same identity. Identity is object identity: the flip
//! fires only when the oracle is asked to mark its own target. Distinct
//! states never coincide, so in that case the oracle reduces to the plain
//! elementwise product and marks nothing.

use crate::error::SimResult;
use crate::state::StateVector;

/// Marking function for a single amplitude pair.
#[inline]
pub fn mark(i: f64, j: f64, same_identity: bool) -> f64 {
    if same_identity { -(i * j) } else { i * j }
}

/// Oracle holding the comparison target it marks against.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOracle {
    target: StateVector,
}

impl PhaseOracle {
    /// Oracle that marks against `target`.
    pub fn new(target: StateVector) -> Self {
        Self { target }
    }

    /// The comparison target.
    pub fn target(&self) -> &StateVector {
        &self.target
    }

    /// Apply the oracle to `psi`, returning a new state.
    pub fn apply(&self, psi: &StateVector) -> SimResult<StateVector> {
        oracle(psi, &self.target)
    }
}

/// Free-standing form of [`PhaseOracle::apply`].
pub fn oracle(psi: &StateVector, target: &StateVector) -> SimResult<StateVector> {
    psi.check_dim(target)?;
    let same = std::ptr::eq(psi, target);
    let marked = psi
        .amplitudes()
        .iter()
        .zip(target.amplitudes().iter())
        .map(|(&i, &j)| mark(i, j, same))
        .collect();
    Ok(StateVector::from_amplitudes(marked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_mark_flips_only_on_identity() {
        assert_eq!(mark(2.0, 3.0, false), 6.0);
        assert_eq!(mark(2.0, 3.0, true), -6.0);
    }

    #[test]
    fn test_distinct_states_give_elementwise_product() {
        let psi = StateVector::from_amplitudes(vec![0.5, 0.5, 0.5, 0.5]);
        let target = StateVector::from_amplitudes(vec![0.5, -0.5, 0.5, -0.5]);
        let out = oracle(&psi, &target).unwrap();
        assert_eq!(out.to_vec(), vec![0.25, -0.25, 0.25, -0.25]);
    }

    #[test]
    fn test_equal_but_distinct_states_do_not_flip() {
        let a = StateVector::from_amplitudes(vec![1.0, 2.0]);
        let b = a.clone();
        assert_eq!(oracle(&a, &b).unwrap().to_vec(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_self_marking_flips_sign() {
        let o = PhaseOracle::new(StateVector::from_amplitudes(vec![1.0, -2.0]));
        let out = o.apply(o.target()).unwrap();
        assert_eq!(out.to_vec(), vec![-1.0, -4.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let o = PhaseOracle::new(StateVector::zeros(4));
        assert_eq!(
            o.apply(&StateVector::zeros(2)),
            Err(SimError::DimensionMismatch {
                expected: 2,
                found: 4
            })
        );
    }
}
