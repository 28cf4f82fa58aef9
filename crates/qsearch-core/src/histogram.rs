//! Outcome accumulation across repeated trials.
//!
//! The engine keeps no state between runs; callers own an
//! [`OutcomeHistogram`] and feed it one outcome index per run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::GroverSearch;
use crate::error::{SimError, SimResult};
use crate::measure::measure_with_rng;

/// Per-index outcome counts over an N-dimensional basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeHistogram {
    counts: Vec<u64>,
}

impl OutcomeHistogram {
    /// An empty histogram with `n` bins.
    pub fn new(n: usize) -> Self {
        Self { counts: vec![0; n] }
    }

    /// Number of bins.
    pub fn dim(&self) -> usize {
        self.counts.len()
    }

    /// Record one outcome.
    pub fn record(&mut self, index: usize) -> SimResult<()> {
        let dim = self.dim();
        let bin = self
            .counts
            .get_mut(index)
            .ok_or(SimError::IndexOutOfRange { index, dim })?;
        *bin += 1;
        Ok(())
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total outcomes recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Empirical probabilities; all zero when nothing has been recorded.
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.dim()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }

    /// Most frequent index (lowest index on ties), or `None` when empty.
    pub fn mode(&self) -> Option<usize> {
        if self.total() == 0 {
            return None;
        }
        let max = self.counts.iter().copied().max()?;
        self.counts.iter().position(|&c| c == max)
    }

    /// Empirical probability at `index` divided by the uniform 1/N.
    pub fn amplification(&self, index: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let p = self.count(index) as f64 / total as f64;
        p * self.dim() as f64
    }
}

/// Run `search` `trials` times, tallying each measured index.
pub fn run_trials<R: Rng>(
    search: &GroverSearch,
    trials: usize,
    rng: &mut R,
) -> SimResult<OutcomeHistogram> {
    run_trials_with(search, trials, rng, |_| {})
}

/// Like [`run_trials`], calling `on_trial` with each outcome as it is recorded.
pub fn run_trials_with<R, F>(
    search: &GroverSearch,
    trials: usize,
    rng: &mut R,
    mut on_trial: F,
) -> SimResult<OutcomeHistogram>
where
    R: Rng,
    F: FnMut(usize),
{
    let mut histogram = OutcomeHistogram::new(search.full_register().dim());
    // The pre-measurement state is identical for every trial.
    let amplified = search.amplified_state()?;
    for _ in 0..trials {
        let outcome = measure_with_rng(&amplified, rng)?;
        histogram.record(outcome.index)?;
        on_trial(outcome.index);
    }
    debug!(trials, mode = ?histogram.mode(), "trials complete");
    Ok(histogram)
}
