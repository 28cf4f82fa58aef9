//! `qsearch-core` — Grover search simulated with real amplitudes.
//!
//! A "database" of N items is modelled as the N standard basis vectors of a
//! real vector space. A search builds the uniform superposition, repeatedly
//! applies a phase oracle and a diffusion (amplitude amplification) step,
//! then samples one basis index with probability equal to its squared
//! amplitude.
//!
//! - [`basis`] — basis vectors and registers
//! - [`hadamard`] — Sylvester-doubled Hadamard transform
//! - [`oracle`] — phase-flip marking
//! - [`diffusion`] — amplitude amplification
//! - [`schedule`] — `floor(π/4 · sqrt(N))` round count
//! - [`measure`] — Born-rule sampling and collapse
//! - [`engine`] — the full search
//! - [`histogram`] — caller-owned outcome accumulator
//!
//! # Quick start
//!
//! ```rust
//! use qsearch_core::{GroverSearch, run_trials};
//! use rand::SeedableRng;
//!
//! let search = GroverSearch::for_indices(16, &[8]).unwrap();
//! assert_eq!(search.iterations(), 3);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let histogram = run_trials(&search, 200, &mut rng).unwrap();
//! assert_eq!(histogram.total(), 200);
//! assert_eq!(histogram.mode(), Some(8));
//! ```

pub mod basis;
pub mod diffusion;
pub mod engine;
pub mod error;
pub mod hadamard;
pub mod histogram;
pub mod measure;
pub mod oracle;
pub mod schedule;
pub mod state;

pub use basis::{BasisVector, Register, basis};
pub use diffusion::{DiffusionOperator, diffuse};
pub use engine::GroverSearch;
pub use error::{SimError, SimResult};
pub use hadamard::{HadamardOperator, hadamard};
pub use histogram::{OutcomeHistogram, run_trials, run_trials_with};
pub use measure::{Measurement, measure, measure_with_rng, sample_index};
pub use oracle::{PhaseOracle, mark, oracle};
pub use schedule::optimal_iterations;
pub use state::{NORM_TOLERANCE, StateVector};
