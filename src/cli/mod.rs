// ABOUTME: CLI argument parsing and command routing for spot-onboard
//
// Provides command-line interface for:
// - Launching the onboarding wizard (tui, default)
// - Running the analysis simulation headless (simulate)
// - Listing the wizard rounds (steps)

pub mod simulate;
pub mod steps;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SPOT Growth Game onboarding wizard
#[derive(Parser)]
#[command(name = "spot-onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file layered over the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the onboarding wizard (default if no command given)
    Tui,

    /// Run the analysis simulation without a terminal UI
    Simulate(SimulateArgs),

    /// Print the wizard rounds
    Steps,
}

/// Arguments for the simulate command
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Milliseconds between ticks (overrides analysis.tick_interval_ms)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}
