//! Configuration layer and entry point for `try`
//!
//! Parses the command line, folds in the environment, then hands a resolved
//! [`trycmd_runner::InvocationConfig`] to the runner and prints its banner.

pub mod cli;
pub mod logging;
pub mod settings;
mod value_parse;

#[cfg(test)]
mod test_utils;

pub use cli::{Cli, ColorModeArg};
pub use settings::{resolve_settings, Settings};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io;
use trycmd_common::exit_codes;
use trycmd_runner::{run_subcommand, show_result, BannerLabels};

/// Run `try` with the process's own arguments.
pub fn run_try() -> Result<i32> {
    run_try_from(std::env::args_os())
}

/// Run `try` with explicit arguments, program name first.
///
/// Returns the exit status the process should end with. Help and version
/// requests return 0; invalid options, bad configuration and a missing
/// command return 1.
pub fn run_try_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { exit_codes::USAGE } else { 0 };
            err.print().context("Failed to print usage")?;
            return Ok(code);
        }
    };
    run_try_with_cli(cli)
}

pub fn run_try_with_cli(cli: Cli) -> Result<i32> {
    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(err) if settings::is_user_error(&err) => {
            eprintln!("try: {err}");
            return Ok(exit_codes::USAGE);
        }
        Err(err) => return Err(err),
    };
    logging::init(settings.debug);
    log::debug!("resolved settings: {settings:?}");

    if cli.command.is_empty() {
        Cli::command()
            .print_help()
            .context("Failed to print usage")?;
        return Ok(exit_codes::USAGE);
    }

    let config = settings.into_invocation(cli.command);
    let status = run_subcommand(&config)?;

    let mut stdout = io::stdout().lock();
    let status = match show_result(&config, &BannerLabels::default(), status, &mut stdout) {
        Ok(status) => status,
        Err(e) => {
            log::warn!("Failed to print result banner: {e}");
            status
        }
    };

    log::debug!("exiting with status {status}");
    Ok(status)
}
