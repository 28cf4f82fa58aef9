//! qsearch Command-Line Interface
//!
//! Runs repeated Grover searches and renders the outcome distribution.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{OutputFormat, schedule, search, version};

/// qsearch - Grover's search simulated with real amplitudes
#[derive(Parser)]
#[command(name = "qsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run repeated searches and print the outcome histogram
    Search {
        /// Dimension of the search space (power of two)
        #[arg(short, long, default_value = "16", env = "QSEARCH_DIM")]
        dim: usize,

        /// Marked basis index (repeatable)
        #[arg(
            short,
            long = "target",
            default_value = "8",
            env = "QSEARCH_TARGETS",
            value_delimiter = ','
        )]
        targets: Vec<usize>,

        /// Number of independent trials
        #[arg(short = 'n', long, default_value = "1000", env = "QSEARCH_TRIALS")]
        trials: usize,

        /// Override the optimal iteration count
        #[arg(short, long, env = "QSEARCH_ITERATIONS")]
        iterations: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(short, long, env = "QSEARCH_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Emit per-round amplification events (visible with -vvv)
        #[arg(long)]
        trace: bool,
    },

    /// Print the optimal iteration count for a dimension
    Schedule {
        /// Dimension of the search space
        #[arg(short, long, default_value = "16", env = "QSEARCH_DIM")]
        dim: usize,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Search {
            dim,
            targets,
            trials,
            iterations,
            seed,
            format,
            trace,
        } => search::execute(&search::SearchArgs {
            dim,
            targets,
            trials,
            iterations,
            seed,
            format,
            trace,
        }),

        Commands::Schedule { dim } => schedule::execute(dim),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
