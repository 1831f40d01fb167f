//! Resolve invocation settings from the command line and environment.
//!
//! Precedence is command line, then environment, then built-in defaults.

use crate::cli::Cli;
use crate::value_parse::parse_env_flag;
use anyhow::Result;
use std::env;
use std::error::Error as StdError;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use trycmd_common::{env_vars, ColorMode, DEFAULT_SHELL};
use trycmd_runner::InvocationConfig;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub(crate) struct UserError {
    message: String,
}

impl UserError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for UserError {}

pub(crate) fn user_error(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(UserError::new(message))
}

pub(crate) fn is_user_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<UserError>())
}

/// Fully resolved options, minus the subcommand itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub shell: PathBuf,
    pub interactive: bool,
    pub color: ColorMode,
    pub verbose: bool,
    pub debug: bool,
}

impl Settings {
    pub fn into_invocation(self, subcommand: Vec<OsString>) -> InvocationConfig {
        InvocationConfig {
            shell: self.shell,
            interactive: self.interactive,
            color: self.color,
            verbose: self.verbose,
            debug: self.debug,
            subcommand,
        }
    }
}

pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let color = match cli.color {
        Some(arg) => arg.into(),
        None => color_from_env()?,
    };
    let shell = cli
        .shell
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(shell_from_env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));

    Ok(Settings {
        shell,
        interactive: cli.interactive || env_flag(env_vars::INTERACTIVE),
        color,
        verbose: cli.verbose,
        debug: env_flag(env_vars::DEBUG),
    })
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn color_from_env() -> Result<ColorMode> {
    match env::var(env_vars::COLOR) {
        Ok(value) if !value.trim().is_empty() => value
            .parse::<ColorMode>()
            .map_err(|e| user_error(format!("{}: {e}", env_vars::COLOR))),
        _ => Ok(ColorMode::default()),
    }
}

fn shell_from_env() -> Option<PathBuf> {
    env::var_os(env_vars::SHELL)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
