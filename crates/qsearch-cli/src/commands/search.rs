//! Search command implementation.

use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use qsearch_core::{GroverSearch, OutcomeHistogram, run_trials_with};

use super::OutputFormat;

/// Parsed arguments for the search command.
pub struct SearchArgs {
    pub dim: usize,
    pub targets: Vec<usize>,
    pub trials: usize,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub trace: bool,
}

/// JSON report for one search command.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub dim: usize,
    pub targets: Vec<usize>,
    pub iterations: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub counts: Vec<u64>,
    pub probabilities: Vec<f64>,
    pub mode: Option<usize>,
    pub elapsed_ms: u64,
}

/// Execute the search command.
pub fn execute(args: &SearchArgs) -> Result<()> {
    let search = build_search(args)?;

    let show_progress = args.format == OutputFormat::Table;
    let bar = if show_progress {
        println!(
            "{} Searching N = {} for {:?} ({} iterations, {} trials)",
            style("→").cyan().bold(),
            style(args.dim).green(),
            args.targets,
            style(search.iterations()).yellow(),
            args.trials
        );
        let bar = ProgressBar::new(args.trials as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} trials")?
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let (report, histogram) = run_search(args, &search, &bar)?;
    bar.finish_and_clear();

    match args.format {
        OutputFormat::Table => print_histogram(&histogram, &args.targets, report.elapsed_ms),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Validate the arguments and configure the engine.
pub fn build_search(args: &SearchArgs) -> Result<GroverSearch> {
    if args.trials == 0 {
        anyhow::bail!("Number of trials must be at least 1");
    }

    let mut search = GroverSearch::for_indices(args.dim, &args.targets)
        .with_context(|| {
            format!(
                "Invalid search space (dim {}, targets {:?})",
                args.dim, args.targets
            )
        })?
        .with_trace(args.trace);
    if let Some(iterations) = args.iterations {
        search = search.with_iterations(iterations);
    }
    Ok(search)
}

/// Run the trials, advancing `bar` once per outcome.
pub fn run_search(
    args: &SearchArgs,
    search: &GroverSearch,
    bar: &ProgressBar,
) -> Result<(SearchReport, OutcomeHistogram)> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let histogram = run_trials_with(search, args.trials, &mut rng, |_| bar.inc(1))
        .with_context(|| format!("Search over dim {} failed", args.dim))?;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(elapsed_ms, "search finished");

    let report = SearchReport {
        dim: args.dim,
        targets: args.targets.clone(),
        iterations: search.iterations(),
        trials: args.trials,
        seed: args.seed,
        counts: histogram.counts().to_vec(),
        probabilities: histogram.probabilities(),
        mode: histogram.mode(),
        elapsed_ms,
    };
    Ok((report, histogram))
}

/// Render the histogram as a labelled bar chart.
fn print_histogram(histogram: &OutcomeHistogram, targets: &[usize], elapsed_ms: u64) {
    println!(
        "\n{} Results ({} trials):",
        style("✓").green().bold(),
        histogram.total()
    );

    let width = histogram.dim().saturating_sub(1).to_string().len();
    for (index, (count, prob)) in histogram
        .counts()
        .iter()
        .zip(histogram.probabilities())
        .enumerate()
    {
        let percent = prob * 100.0;
        let bar: String = "█".repeat((percent / 2.0).round() as usize);
        let label = format!("|{index:>width$}⟩");
        let label = if targets.contains(&index) {
            style(label).yellow().bold()
        } else {
            style(label).cyan()
        };
        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            label,
            count,
            percent,
            style(bar).green()
        );
    }

    if let Some(mode) = histogram.mode() {
        println!(
            "\n  Most frequent: |{}⟩ ({:.1}× uniform)",
            style(mode).yellow(),
            histogram.amplification(mode)
        );
    }
    println!("  Execution time: {} ms", style(elapsed_ms).yellow());
}
