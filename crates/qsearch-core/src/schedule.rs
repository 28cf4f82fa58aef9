//! Grover iteration count.

use std::f64::consts::FRAC_PI_4;

/// Optimal number of amplification rounds, `floor((π/4) · sqrt(n))`.
///
/// Running fewer or more rounds lowers the success probability.
pub fn optimal_iterations(n: usize) -> usize {
    (FRAC_PI_4 * (n as f64).sqrt()).floor() as usize
}
