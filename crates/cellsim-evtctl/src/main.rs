//! `cellsim-evtctl` binary: loads configuration, installs logging, verifies
//! the event registry and runs one command.

use std::process::ExitCode;

use cellsim_evtctl::cli::{Cli, Command};
use cellsim_evtctl::{commands, init_tracing, load_config};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(Some(&cli.config)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    init_tracing(&config.logging);
    tracing::debug!(path = %cli.config, "loaded configuration");

    // `check` reports the self-check result itself.
    if config.registry.self_check_on_start && !matches!(cli.command, Command::Check) {
        if let Err(err) = cellsim_events::self_check() {
            if tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!(error = %err, "event registry failed its start-up self-check");
            } else {
                eprintln!("error: event registry failed its start-up self-check: {err}");
                if let cellsim_events::RegistryError::Inconsistent(violations) = &err {
                    for violation in violations {
                        eprintln!("  {violation}");
                    }
                }
            }
            return ExitCode::from(1);
        }
    }

    let format = cli.format.unwrap_or(config.output.format);
    match commands::run(&cli.command, format) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
