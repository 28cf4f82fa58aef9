//! Real-valued amplitude vectors.
//!
//! Every operator in this crate takes a `&StateVector` and returns a new one;
//! nothing is mutated in place.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Default tolerance for unit-norm checks.
pub const NORM_TOLERANCE: f64 = 1e-10;

/// A length-N column of real amplitudes over the computational basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    amplitudes: Array1<f64>,
}

impl StateVector {
    /// Wrap a vector of amplitudes. No normalisation is applied.
    pub fn from_amplitudes(amplitudes: Vec<f64>) -> Self {
        Self {
            amplitudes: Array1::from(amplitudes),
        }
    }

    /// The all-zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            amplitudes: Array1::zeros(dim),
        }
    }

    pub(crate) fn from_array(amplitudes: Array1<f64>) -> Self {
        Self { amplitudes }
    }

    /// Dimension of the ambient space.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitude at basis index `i`, or `None` if out of range.
    pub fn amplitude(&self, i: usize) -> Option<f64> {
        self.amplitudes.get(i).copied()
    }

    /// Borrow the underlying `ndarray` view.
    pub fn amplitudes(&self) -> &Array1<f64> {
        &self.amplitudes
    }

    /// Copy the amplitudes out in basis order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.amplitudes.to_vec()
    }

    /// Sum of squared amplitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.dot(&self.amplitudes)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Whether the squared amplitudes sum to 1 within `tol`.
    pub fn is_normalized(&self, tol: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tol
    }

    /// Rescale to unit norm.
    pub fn normalized(&self) -> SimResult<Self> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(SimError::ZeroNorm);
        }
        Ok(Self::from_array(&self.amplitudes / norm))
    }

    /// Multiply every amplitude by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_array(&self.amplitudes * factor)
    }

    /// Vector sum `self + other`.
    pub fn try_add(&self, other: &Self) -> SimResult<Self> {
        self.check_dim(other)?;
        Ok(Self::from_array(&self.amplitudes + &other.amplitudes))
    }

    /// Elementwise product `self ⊙ other`.
    pub fn hadamard_product(&self, other: &Self) -> SimResult<Self> {
        self.check_dim(other)?;
        Ok(Self::from_array(&self.amplitudes * &other.amplitudes))
    }

    /// Outer product ψψᵗ. Its diagonal holds the Born probabilities.
    pub fn density_matrix(&self) -> Array2<f64> {
        let column = self.amplitudes.view().insert_axis(Axis(1));
        let row = self.amplitudes.view().insert_axis(Axis(0));
        column.dot(&row)
    }

    /// Squared amplitude per basis index: the diagonal of ψψᵗ.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a * a).collect()
    }

    pub(crate) fn check_dim(&self, other: &Self) -> SimResult<()> {
        if self.dim() != other.dim() {
            return Err(SimError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }
}
