//! End-to-end Grover search over a real amplitude space.
//!
//! A run walks `Init → Marked → Amplified`, repeats the
//! oracle/diffusion pair for the scheduled number of rounds and finishes
//! with a single measurement.

use rand::Rng;
use tracing::{debug, trace};

use crate::basis::Register;
use crate::diffusion::DiffusionOperator;
use crate::error::{SimError, SimResult};
use crate::hadamard::HadamardOperator;
use crate::measure::{Measurement, measure_with_rng};
use crate::oracle::PhaseOracle;
use crate::schedule::optimal_iterations;
use crate::state::StateVector;

/// One configured search: the full register, the marked items, and the
/// round count.
#[derive(Debug, Clone)]
pub struct GroverSearch {
    full: Register,
    target: Register,
    iterations: Option<usize>,
    trace: bool,
}

impl GroverSearch {
    /// Configure a search of `full` for the items in `target`.
    ///
    /// Both registers must live in the same space.
    pub fn new(full: Register, target: Register) -> SimResult<Self> {
        if full.dim() != target.dim() {
            return Err(SimError::DimensionMismatch {
                expected: full.dim(),
                found: target.dim(),
            });
        }
        Ok(Self {
            full,
            target,
            iterations: None,
            trace: false,
        })
    }

    /// Search an `n`-dimensional space for the given basis indices.
    pub fn for_indices(n: usize, marked: &[usize]) -> SimResult<Self> {
        Self::new(Register::full(n)?, Register::from_indices(n, marked)?)
    }

    /// Override the scheduled round count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Emit per-round `trace` events with the marked-item probability.
    /// Results are unaffected.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Register the superposition is built over.
    pub fn full_register(&self) -> &Register {
        &self.full
    }

    /// Marked items.
    pub fn target_register(&self) -> &Register {
        &self.target
    }

    /// Number of oracle/diffusion rounds after the first pair.
    pub fn iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| optimal_iterations(self.target.dim()))
    }

    /// The amplified state right before measurement. Deterministic.
    pub fn amplified_state(&self) -> SimResult<StateVector> {
        let reference = self.target.sum();
        let hadamard = HadamardOperator::new(reference.dim())?;
        let oracle = PhaseOracle::new(hadamard.apply(&reference)?);
        let diffusion = DiffusionOperator::new(reference);

        let psi = self.full.superposition();
        let marked = oracle.apply(&psi)?;
        let mut amplified = diffusion.apply(&marked)?;

        let rounds = self.iterations();
        debug!(
            dim = self.full.dim(),
            marked = ?self.target.indices(),
            rounds,
            psi_weight = diffusion.psi_weight(),
            reference_weight = diffusion.reference_weight(),
            "running Grover search"
        );

        for round in 0..rounds {
            let marked = oracle.apply(&amplified)?;
            amplified = diffusion.apply(&marked)?;
            if self.trace {
                trace!(round, p_marked = self.marked_probability(&amplified), "amplified");
            }
        }

        Ok(amplified)
    }

    /// Run the search and measure using the supplied generator.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> SimResult<Measurement> {
        let amplified = self.amplified_state()?;
        measure_with_rng(&amplified, rng)
    }

    /// Run the search and measure using the thread-local generator.
    pub fn run(&self) -> SimResult<Measurement> {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Share of squared-amplitude mass on the marked items.
    pub fn marked_probability(&self, psi: &StateVector) -> f64 {
        let total = psi.norm_sqr();
        if total == 0.0 {
            return 0.0;
        }
        let probabilities = psi.probabilities();
        let marked: f64 = self
            .target
            .iter()
            .map(|v| probabilities.get(v.index()).copied().unwrap_or(0.0))
            .sum();
        marked / total
    }
}
