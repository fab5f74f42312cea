// Entrypoint for the CLI application.
// - Token lookup happens before argument parsing, matching the documented
//   contract that a missing token fails fast with a diagnostic.
// - The client is constructed once and passed to every handler; handled
//   failures print their message here and map to exit codes.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use vagrant_cloud_cli::api::{self, ApiClient};
use vagrant_cloud_cli::cli::args::Cli;
use vagrant_cloud_cli::commands::{self, CliError};

fn main() -> ExitCode {
    let Some(token) = api::token_from_env() else {
        eprintln!("Error: Neither ATLAS_TOKEN or VAGRANT_CLOUD_TOKEN are defined");
        return ExitCode::from(1);
    };

    let cli = Cli::parse();

    let timeout = cli.timeout.map(Duration::from_secs);
    let api = match ApiClient::new(api::endpoint_from_env(), &token, timeout) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::from(1);
        }
    };

    match commands::dispatch(&api, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                // Handled failures go to stdout like the success paths;
                // usage errors and diagnostics go to stderr.
                CliError::Failed(_) | CliError::Remote { .. } => println!("{err}"),
                _ => eprintln!("{err}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}
