//! Born-rule measurement in the computational basis.
//!
//! Sampling walks the probability list subtracting each mass from a uniform
//! draw in `[0, total)`; the first index where the remainder reaches zero is
//! the outcome. The state is then projected onto that basis vector and
//! renormalised.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::basis::BasisVector;
use crate::error::{SimError, SimResult};
use crate::state::StateVector;

/// Sampled outcome and the collapsed, unit-norm post-measurement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Observed basis index in `[0, N)`.
    pub index: usize,
    /// `P_index · psi`, renormalised.
    pub state: StateVector,
}

/// Draw an index with probability proportional to `weights[i]`.
///
/// Weights need not sum to one. Zero-weight indices are never returned.
/// Floating-point rounding can leave a positive remainder after the last
/// weight; the walk then settles on the last index with positive weight.
/// Returns `None` when the total mass is zero, negative or not finite.
pub fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }

    let mut r = rng.gen_range(0.0..total);
    let mut last_valid = None;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        last_valid = Some(i);
        r -= w;
        if r <= 0.0 {
            return Some(i);
        }
    }
    last_valid
}

/// Measure `psi` using the supplied generator.
pub fn measure_with_rng<R: Rng>(psi: &StateVector, rng: &mut R) -> SimResult<Measurement> {
    let probabilities = psi.probabilities();
    let index = sample_index(&probabilities, rng).ok_or(SimError::ZeroNorm)?;

    let projector = BasisVector::new(index, psi.dim())?;
    let state = projector.project(psi)?.normalized()?;
    trace!(index, p = probabilities[index], "measured");

    Ok(Measurement { index, state })
}

/// Measure `psi` using the thread-local generator.
pub fn measure(psi: &StateVector) -> SimResult<Measurement> {
    measure_with_rng(psi, &mut rand::thread_rng())
}
