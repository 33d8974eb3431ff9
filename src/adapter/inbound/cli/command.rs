//! Command-line interface definitions.
//!
//! Defines the CLI structure for the supplyplan application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minimum-cost transportation planner
#[derive(Parser, Debug)]
#[command(name = "supplyplan")]
#[command(version)]
pub struct Cli {
    /// Path to an application config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the supplyplan CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a problem file and print the optimal allocation
    Solve(SolveArgs),

    /// Validate a problem file without solving it
    Check(ProblemArg),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `supplyplan config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Shared argument struct for commands that take only a problem file.
#[derive(Parser, Debug)]
pub struct ProblemArg {
    /// Path to the problem file (TOML).
    pub problem: PathBuf,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to the problem file (TOML).
    pub problem: PathBuf,

    /// Print the LP model before solving.
    #[arg(long)]
    pub show_model: bool,

    /// Omit routes that ship nothing.
    #[arg(long)]
    pub hide_zero: bool,
}
