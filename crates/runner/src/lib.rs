//! Subcommand runner for `try`
//!
//! This library runs one command inside a shell, waits for it, and reports
//! the outcome with a standard banner while passing the exit status on.
//!
//! ## Architecture
//!
//! The runner works by:
//! 1. Building `<shell> [-i] -c -- '<cmd> "$@"' <cmd> <args...>` in one
//!    precisely sized buffer ([`make_shell_command`])
//! 2. Spawning that vector and waiting for that child alone ([`run_subcommand`])
//! 3. Folding the wait status into a Bash-style exit code
//!    ([`exit_code_from_status`])
//! 4. Printing the banner with shell-quoted arguments ([`show_result`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trycmd_runner::{run_subcommand, show_result, BannerLabels, InvocationConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = InvocationConfig::new("/bin/sh", ["ls", "-l"]);
//!     let status = run_subcommand(&config)?;
//!     let mut stdout = std::io::stdout().lock();
//!     let status = show_result(&config, &BannerLabels::default(), status, &mut stdout)?;
//!     std::process::exit(status);
//! }
//! ```

#[cfg(not(unix))]
compile_error!("trycmd-runner supports Unix-like platforms only");

pub use banner::{show_result, BannerLabels, TerminalStream, DIVIDER_WIDTH};
pub use command::{
    make_shell_command, shell_command_size, ShellArgv, ShellCommand, ShellCommandSize,
};
pub use context::InvocationConfig;
pub use exec::{exit_code_from_status, run_subcommand};
pub use quote::{needs_quoting, quote_arg, write_arg, write_argv};

mod banner;
mod command;
mod context;
mod exec;
mod quote;
