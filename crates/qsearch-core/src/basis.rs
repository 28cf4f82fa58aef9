//! Computational basis vectors and registers built from them.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::state::StateVector;

/// The standard basis vector |i⟩ of an N-dimensional real space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBasisVector")]
pub struct BasisVector {
    index: usize,
    state: StateVector,
}

impl BasisVector {
    /// Build |index⟩ in a space of dimension `dim`.
    pub fn new(index: usize, dim: usize) -> SimResult<Self> {
        if dim == 0 {
            return Err(SimError::EmptyBasis);
        }
        if index >= dim {
            return Err(SimError::IndexOutOfRange { index, dim });
        }
        let mut amplitudes = vec![0.0; dim];
        amplitudes[index] = 1.0;
        Ok(Self {
            index,
            state: StateVector::from_amplitudes(amplitudes),
        })
    }

    /// Position of the single 1.0 entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Dimension of the space the vector lives in.
    pub fn dim(&self) -> usize {
        self.state.dim()
    }

    /// The basis vector as a plain amplitude vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Apply the projector |i⟩⟨i| to `psi`.
    pub fn project(&self, psi: &StateVector) -> SimResult<StateVector> {
        self.state.check_dim(psi)?;
        let mut projected = vec![0.0; psi.dim()];
        projected[self.index] = psi.amplitudes()[self.index];
        Ok(StateVector::from_amplitudes(projected))
    }
}

/// Unchecked wire form of [`BasisVector`].
#[derive(Deserialize)]
struct RawBasisVector {
    index: usize,
    state: StateVector,
}

impl TryFrom<RawBasisVector> for BasisVector {
    type Error = SimError;

    fn try_from(raw: RawBasisVector) -> SimResult<Self> {
        let rebuilt = Self::new(raw.index, raw.state.dim())?;
        // The amplitudes must be exactly the indicator of `index`.
        if rebuilt.state != raw.state {
            return Err(SimError::NotBasisVector(raw.index));
        }
        Ok(rebuilt)
    }
}

/// All N basis vectors, ordered so that entry `i` is |i⟩.
pub fn basis(n: usize) -> SimResult<Vec<BasisVector>> {
    if n == 0 {
        return Err(SimError::EmptyBasis);
    }
    (0..n).map(|i| BasisVector::new(i, n)).collect()
}

/// An ordered, non-empty sequence of basis vectors sharing one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegister")]
pub struct Register {
    vectors: Vec<BasisVector>,
}

#[derive(Deserialize)]
struct RawRegister {
    vectors: Vec<BasisVector>,
}

impl TryFrom<RawRegister> for Register {
    type Error = SimError;

    fn try_from(raw: RawRegister) -> SimResult<Self> {
        Self::new(raw.vectors)
    }
}

impl Register {
    /// Wrap basis vectors, checking they are non-empty and share a dimension.
    pub fn new(vectors: Vec<BasisVector>) -> SimResult<Self> {
        let first = vectors.first().ok_or(SimError::EmptyRegister)?;
        let dim = first.dim();
        if let Some(bad) = vectors.iter().find(|v| v.dim() != dim) {
            return Err(SimError::DimensionMismatch {
                expected: dim,
                found: bad.dim(),
            });
        }
        Ok(Self { vectors })
    }

    /// The full register: every basis vector of an `n`-dimensional space.
    pub fn full(n: usize) -> SimResult<Self> {
        Self::new(basis(n)?)
    }

    /// A register holding |i⟩ for each `i` in `indices`.
    pub fn from_indices(dim: usize, indices: &[usize]) -> SimResult<Self> {
        let vectors = indices
            .iter()
            .map(|&i| BasisVector::new(i, dim))
            .collect::<SimResult<Vec<_>>>()?;
        Self::new(vectors)
    }

    /// Dimension of the space the members live in.
    pub fn dim(&self) -> usize {
        self.vectors[0].dim()
    }

    /// Number of basis vectors in the register.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always false for a constructed register.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Members in register order.
    pub fn iter(&self) -> impl Iterator<Item = &BasisVector> {
        self.vectors.iter()
    }

    /// Basis indices of the members, in register order.
    pub fn indices(&self) -> Vec<usize> {
        self.vectors.iter().map(BasisVector::index).collect()
    }

    /// Unnormalised sum of the member vectors.
    pub fn sum(&self) -> StateVector {
        let mut amplitudes = vec![0.0; self.dim()];
        for v in &self.vectors {
            amplitudes[v.index()] += 1.0;
        }
        StateVector::from_amplitudes(amplitudes)
    }

    /// Equal-weight superposition of the members.
    ///
    /// Each member is divided by the Frobenius norm of the stacked register,
    /// which for unit basis vectors is `sqrt(len)`.
    pub fn superposition(&self) -> StateVector {
        let stacked_norm = (self.len() as f64).sqrt();
        self.sum().scaled(1.0 / stacked_norm)
    }
}
