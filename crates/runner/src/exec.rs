//! Subcommand execution and exit status translation
//!
//! Spawns the constructed shell command, waits for that child alone and
//! folds its termination into one shell-compatible exit code.

use anyhow::{bail, Context, Result};
use nix::sys::signal::Signal;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use trycmd_common::exit_codes;

use crate::command::{make_shell_command, shell_command_size, ShellCommand};
use crate::context::InvocationConfig;
use crate::quote::write_argv;

/// Run the configured subcommand inside its shell and return its exit code.
///
/// A normal exit yields the child's own code, death by signal `n` yields
/// `128 + n`, and anything else yields 255. If the shell cannot be started
/// at all the result is 127, as an interactive shell reports for an unknown
/// command.
///
/// An error is returned only when the runner loses track of its child or its
/// own buffer sizing is inconsistent. Both are bugs in the runner.
pub fn run_subcommand(config: &InvocationConfig) -> Result<i32> {
    let size = shell_command_size(config);
    let mut buffer = vec![0u8; size.bytes];
    let argv = match make_shell_command(config, &mut buffer) {
        ShellCommand::Built(argv) => argv,
        ShellCommand::Required(required) => {
            bail!("shell command needs {required:?} after sizing reported {size:?}")
        }
    };

    if config.echo_enabled() {
        let mut stderr = io::stderr().lock();
        write_argv(&mut stderr, "try:", argv.as_slice()).context("Failed to echo command")?;
        stderr.flush().context("Failed to echo command")?;
    }

    let program = exec_path(argv.program());
    log::debug!("spawning {}", program.display());
    let mut child = match Command::new(program.as_ref()).args(argv.args()).spawn() {
        Ok(child) => child,
        Err(e) => {
            eprintln!("try: {}: {e}", config.shell.display());
            log::debug!(
                "spawn failed (kind={:?}, errno={:?})",
                e.kind(),
                e.raw_os_error()
            );
            return Ok(exit_codes::COMMAND_NOT_FOUND);
        }
    };

    let pid = child.id();
    log::debug!("waiting for child pid {pid}");
    let status = child
        .wait()
        .with_context(|| format!("Lost track of child process {pid}"))?;
    log::debug!("child pid {pid} finished with raw status {}", status.into_raw());

    let exit_code = exit_code_from_status(status);
    log::debug!("run_subcommand: returning {exit_code}");
    Ok(exit_code)
}

/// Path handed to the OS for the shell.
///
/// A name without a `/` names a file in the current directory, as it would for
/// `execv`. `Command` would otherwise search `PATH` for it.
fn exec_path(shell: &OsStr) -> Cow<'_, Path> {
    let path = Path::new(shell);
    if shell.as_bytes().contains(&b'/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(Path::new(".").join(path))
    }
}

/// Translate a wait status into a shell-style exit code.
pub fn exit_code_from_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    // Unix signal exit status parity - 128 + signal for terminated processes
    if let Some(signal) = status.signal() {
        match Signal::try_from(signal) {
            Ok(name) => log::debug!("child terminated by {name:?}"),
            Err(_) => log::debug!("child terminated by signal {signal}"),
        }
        return exit_codes::SIGNAL_BASE + signal;
    }

    log::debug!("child ended abnormally (raw status {})", status.into_raw());
    exit_codes::ABNORMAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sh(subcommand: &[&str]) -> InvocationConfig {
        InvocationConfig::new("/bin/sh", subcommand.iter().copied())
    }

    #[test]
    fn test_exec_path_never_searches_path() {
        assert_eq!(exec_path(OsStr::new("/bin/sh")), Path::new("/bin/sh"));
        assert_eq!(exec_path(OsStr::new("bin/sh")), Path::new("bin/sh"));
        assert_eq!(exec_path(OsStr::new("./sh")), Path::new("./sh"));
        assert_eq!(exec_path(OsStr::new("sh")), Path::new("./sh"));
    }

    #[test]
    fn test_normal_exit_codes_pass_through() {
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(1 << 8)), 1);
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(129 << 8)), 129);
    }

    #[test]
    fn test_signal_deaths_add_the_signal_base() {
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(11)), 139);
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(6)), 134);
        // Core-dump bit does not change the signal number
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(0x80 | 11)), 139);
    }

    #[test]
    fn test_other_terminations_are_abnormal() {
        // WIFSTOPPED with SIGSTOP
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(0x137f)), 255);
    }

    #[test]
    fn test_true_and_false() {
        assert_eq!(run_subcommand(&sh(&["true"])).unwrap(), 0);
        assert_eq!(run_subcommand(&sh(&["false"])).unwrap(), 1);
    }

    #[test]
    fn test_arguments_reach_the_command() {
        assert_eq!(run_subcommand(&sh(&["test", "a b", "=", "a b"])).unwrap(), 0);
        assert_eq!(run_subcommand(&sh(&["test", "$HOME", "=", "$HOME"])).unwrap(), 0);
        assert_eq!(run_subcommand(&sh(&["test", "x", "=", "y"])).unwrap(), 1);
    }

    #[test]
    fn test_signal_death_through_the_shell() {
        let segv = sh(&["sh", "-c", "kill -SEGV $$"]);
        assert_eq!(run_subcommand(&segv).unwrap(), 139);
        let abrt = sh(&["sh", "-c", "kill -ABRT $$"]);
        assert_eq!(run_subcommand(&abrt).unwrap(), 134);
    }

    #[test]
    fn test_unknown_command_is_127() {
        assert_eq!(run_subcommand(&sh(&["XX_this_should_not_exist_XX"])).unwrap(), 127);
    }

    #[test]
    fn test_missing_shell_is_127() {
        let config = InvocationConfig::new("/nonexistent/shell", ["true"]);
        assert_eq!(run_subcommand(&config).unwrap(), 127);
    }

    #[test]
    fn test_non_executable_shell_is_127() {
        let temp = TempDir::new().unwrap();
        let shell = temp.path().join("not_exec");
        fs::write(&shell, "#!/bin/sh\nexit 0\n").unwrap();
        let config = InvocationConfig::new(&shell, ["true"]);
        assert_eq!(run_subcommand(&config).unwrap(), 127);
    }

    #[test]
    fn test_verbose_run_still_returns_status() {
        let config = sh(&["false"]).with_verbose(true);
        assert_eq!(run_subcommand(&config).unwrap(), 1);
    }
}
