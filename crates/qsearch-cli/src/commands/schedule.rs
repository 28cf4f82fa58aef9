//! Schedule command implementation.

use anyhow::Result;
use console::style;

use qsearch_core::optimal_iterations;

/// Execute the schedule command.
pub fn execute(dim: usize) -> Result<()> {
    if dim == 0 {
        anyhow::bail!("Dimension must be at least 1");
    }
    println!(
        "{} N = {}: {} iterations (floor(π/4 · √N))",
        style("→").cyan().bold(),
        style(dim).green(),
        style(optimal_iterations(dim)).yellow()
    );
    Ok(())
}
