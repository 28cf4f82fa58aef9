//! Error types for the search core.

use thiserror::Error;

/// Errors produced by the Grover search simulation.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SimError {
    /// Two vectors (or a vector and an operator) disagree on dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the left-hand operand.
        expected: usize,
        /// Dimension actually supplied.
        found: usize,
    },

    /// The Hadamard construction only reaches powers of two.
    #[error("dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// `basis(0)` has no vectors to produce.
    #[error("basis dimension must be at least 1")]
    EmptyBasis,

    /// A register must hold at least one basis vector.
    #[error("register contains no basis vectors")]
    EmptyRegister,

    /// A basis index or measurement outcome lies outside `[0, dim)`.
    #[error("index {index} is out of range for dimension {dim}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Dimension of the space.
        dim: usize,
    },

    /// Amplitudes that do not form the indicator vector of their index.
    #[error("amplitudes are not the basis vector |{0}⟩")]
    NotBasisVector(usize),

    /// The state has no probability mass to normalise or sample from.
    #[error("state has zero (or non-finite) norm")]
    ZeroNorm,
}

/// Result type for search simulation operations.
pub type SimResult<T> = Result<T, SimError>;
