//! CLI command implementations.

pub mod schedule;
pub mod search;
pub mod version;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable bar chart
    Table,
    /// Machine-readable JSON on stdout
    Json,
}
