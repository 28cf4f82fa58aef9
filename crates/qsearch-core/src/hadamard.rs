//! The N×N Hadamard transform.
//!
//! Built by Sylvester doubling:
//!
//! ```text
//!   H_1  = [1]
//!   H_2k = [[H_k,  H_k],
//!           [H_k, -H_k]]
//! ```
//!
//! repeated `log2(N)` times, then scaled once by `1/sqrt(N)`. The result is
//! symmetric and orthonormal, so `H · H = I`.

use ndarray::{Array2, s};
use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::state::StateVector;

/// A dense, normalised Hadamard matrix of a fixed power-of-two dimension.
#[derive(Debug, Clone)]
pub struct HadamardOperator {
    matrix: Array2<f64>,
}

impl HadamardOperator {
    /// Construct `H_dim`. Fails fast unless `dim` is a power of two.
    pub fn new(dim: usize) -> SimResult<Self> {
        if !dim.is_power_of_two() {
            return Err(SimError::NotPowerOfTwo(dim));
        }

        let mut h = Array2::<f64>::ones((1, 1));
        while h.nrows() < dim {
            let k = h.nrows();
            let mut next = Array2::<f64>::zeros((2 * k, 2 * k));
            next.slice_mut(s![..k, ..k]).assign(&h);
            next.slice_mut(s![..k, k..]).assign(&h);
            next.slice_mut(s![k.., ..k]).assign(&h);
            next.slice_mut(s![k.., k..]).assign(&h.mapv(|x| -x));
            h = next;
        }

        let matrix = h * (1.0 / (dim as f64).sqrt());
        trace!(dim, "built Hadamard matrix");
        Ok(Self { matrix })
    }

    /// Dimension N of the operator.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// The scaled matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Matrix-vector product `H · psi`.
    pub fn apply(&self, psi: &StateVector) -> SimResult<StateVector> {
        if psi.dim() != self.dim() {
            return Err(SimError::DimensionMismatch {
                expected: self.dim(),
                found: psi.dim(),
            });
        }
        Ok(StateVector::from_array(self.matrix.dot(psi.amplitudes())))
    }
}

/// Build `H_N` for the vector's own dimension and apply it once.
pub fn hadamard(psi: &StateVector) -> SimResult<StateVector> {
    HadamardOperator::new(psi.dim())?.apply(psi)
}
