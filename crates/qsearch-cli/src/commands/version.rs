//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grover search simulation with real amplitudes",
        style("qsearch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsearch-core  Basis, Hadamard, oracle, diffusion, measurement");
    println!("  qsearch-cli   Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
