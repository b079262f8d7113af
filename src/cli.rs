use std::path::PathBuf;

use clap::Parser;

/// Message printed when no matrix file is given.
pub const USAGE: &str = "Invalid number of parameters.\nUsage: vmp FILE";

/// Power iteration for discrete time Markov chains.
#[derive(Parser)]
#[command(
    name = "vmp",
    version,
    about = "Vector-matrix product power iteration for discrete time Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Solver arguments.
    #[command(flatten)]
    pub solve: SolveArgs,
}

/// Arguments for a power-iteration run.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Path to the transition matrix file.
    pub file: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the per-element convergence residue.
    #[arg(long)]
    pub residue: Option<f64>,

    /// Override the iteration cap.
    #[arg(long = "max-runs")]
    pub max_runs: Option<usize>,

    /// Override the number of decimals printed per value.
    #[arg(long)]
    pub precision: Option<usize>,

    /// Only check the last row's width against the row count.
    #[arg(long)]
    pub lenient: bool,

    /// Print the loaded matrix to stderr before iterating.
    #[arg(long = "show-matrix")]
    pub show_matrix: bool,
}
