//! Shell command construction
//!
//! The subcommand is handed to the shell as
//! `<shell> [-i] -c -- '<cmd> "$@"' <cmd> <args...>` so the shell sees the
//! command name as `$0` and the arguments as positional parameters. Nothing in
//! the user's arguments is ever re-parsed by the shell.
//!
//! Construction is two-pass: [`shell_command_size`] reports the storage needed
//! and [`make_shell_command`] fills a caller-provided buffer of at least that
//! size. The derived strings (shell path, options and command script) live in
//! that one buffer; the subcommand arguments are borrowed from the config.

use crate::context::InvocationConfig;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

const OPT_INTERACTIVE: &[u8] = b"-i";
const OPT_COMMAND: &[u8] = b"-c";
const OPT_END: &[u8] = b"--";
const SCRIPT_SUFFIX: &[u8] = b"\"$@\"";

/// Storage required to build a shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellCommandSize {
    /// Entries in the argument vector, shell path included
    pub args: usize,
    /// Bytes of backing storage for the derived strings
    pub bytes: usize,
}

/// Outcome of [`make_shell_command`]
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    /// The buffer was too small. Nothing was written.
    Required(ShellCommandSize),
    /// The command was written into the buffer.
    Built(ShellArgv<'a>),
}

/// An exec-ready argument vector whose first entry is the shell to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellArgv<'a> {
    argv: Vec<&'a OsStr>,
    size: ShellCommandSize,
}

impl<'a> ShellArgv<'a> {
    /// Path of the executable to spawn
    pub fn program(&self) -> &'a OsStr {
        self.argv[0]
    }

    /// Everything after the program
    pub fn args(&self) -> &[&'a OsStr] {
        &self.argv[1..]
    }

    /// The full vector, program first
    pub fn as_slice(&self) -> &[&'a OsStr] {
        &self.argv
    }

    /// Storage this vector was built with, as [`shell_command_size`] reported it
    pub fn size(&self) -> ShellCommandSize {
        self.size
    }
}

/// Report the storage [`make_shell_command`] needs for `config`.
///
/// # Panics
///
/// Panics if `config.subcommand` is empty. Callers check for a missing
/// command before building anything.
pub fn shell_command_size(config: &InvocationConfig) -> ShellCommandSize {
    let program = subcommand_program(config);
    let options = shell_options(config.interactive);
    let bytes = config.shell.as_os_str().len()
        + options.iter().map(|option| option.len()).sum::<usize>()
        + script_len(program);
    let args = 1 + options.len() + 1 + config.subcommand.len();

    log::debug!("shell command size: args={args} bytes={bytes}");
    ShellCommandSize { args, bytes }
}

/// Build the shell argument vector for `config` inside `buffer`.
///
/// If `buffer` is shorter than [`shell_command_size`] reports, the buffer is
/// left untouched and only the required size is returned. Bytes past the
/// required size are never written.
///
/// # Panics
///
/// Panics if `config.subcommand` is empty, or if the writing pass ever
/// disagrees with the sizing pass.
pub fn make_shell_command<'a>(
    config: &'a InvocationConfig,
    buffer: &'a mut [u8],
) -> ShellCommand<'a> {
    let size = shell_command_size(config);
    log::debug!(
        "make_shell_command: buflen={} required={}",
        buffer.len(),
        size.bytes
    );
    if buffer.len() < size.bytes {
        return ShellCommand::Required(size);
    }

    let program = subcommand_program(config);
    let buflen = buffer.len();
    let mut free: &'a mut [u8] = buffer;
    let mut argv = Vec::with_capacity(size.args);

    argv.push(place(&mut free, &[config.shell.as_os_str().as_bytes()]));
    for option in shell_options(config.interactive) {
        argv.push(place(&mut free, &[*option]));
    }
    argv.push(place(&mut free, &[program.as_bytes(), b" ", SCRIPT_SUFFIX]));
    argv.extend(config.subcommand.iter().map(OsString::as_os_str));

    assert_eq!(
        buflen - free.len(),
        size.bytes,
        "shell command storage disagrees with its sizing pass"
    );
    assert_eq!(
        argv.len(),
        size.args,
        "shell command length disagrees with its sizing pass"
    );

    ShellCommand::Built(ShellArgv { argv, size })
}

fn subcommand_program(config: &InvocationConfig) -> &OsStr {
    match config.program() {
        Some(program) => program.as_os_str(),
        None => panic!("shell command requested for an empty subcommand"),
    }
}

fn shell_options(interactive: bool) -> &'static [&'static [u8]] {
    if interactive {
        &[OPT_INTERACTIVE, OPT_COMMAND, OPT_END]
    } else {
        &[OPT_COMMAND, OPT_END]
    }
}

// `<cmd> "$@"`
fn script_len(program: &OsStr) -> usize {
    program.len() + 1 + SCRIPT_SUFFIX.len()
}

/// Copy `parts` back to back into the front of `free`, then advance it.
fn place<'a>(free: &mut &'a mut [u8], parts: &[&[u8]]) -> &'a OsStr {
    let len = parts.iter().map(|part| part.len()).sum();
    let (slot, rest) = std::mem::take(free).split_at_mut(len);
    *free = rest;

    let mut offset = 0;
    for part in parts {
        slot[offset..offset + part.len()].copy_from_slice(part);
        offset += part.len();
    }

    let slot: &'a [u8] = slot;
    OsStr::from_bytes(slot)
}
