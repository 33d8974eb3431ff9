use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use supplyplan::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use supplyplan::adapter::inbound::cli::output::{self, OutputConfig};
use supplyplan::adapter::inbound::cli::{check, config, solve};
use supplyplan::error::Result;
use supplyplan::infrastructure::config::settings::Config;
use tracing::debug;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, color));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.verbose {
        0 => {}
        1 => config.logging.level = "info".into(),
        2 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();
    debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Solve(args) => solve::execute(&args, &config),
        Commands::Check(args) => check::execute(&args),
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
