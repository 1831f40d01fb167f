//! Invocation configuration handed to the runner
//!
//! The configuration layer resolves command-line options and environment
//! variables into one of these before anything is spawned. The runner never
//! reads the environment itself.

use std::ffi::OsString;
use std::path::PathBuf;
use trycmd_common::{ColorMode, DEFAULT_SHELL};

/// Everything needed to run one subcommand and report its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Shell hosting the subcommand. Must support `-i`, `-c` and `--`.
    pub shell: PathBuf,
    /// Run the subcommand in an interactive subshell so aliases resolve
    pub interactive: bool,
    /// Result banner color mode, resolved once per invocation
    pub color: ColorMode,
    /// Echo the constructed shell command on stderr before running it
    pub verbose: bool,
    /// Diagnostic logging requested; also implies the command echo
    pub debug: bool,
    /// The user's command followed by its arguments
    pub subcommand: Vec<OsString>,
}

impl InvocationConfig {
    /// Create a non-interactive, quiet configuration for `subcommand`.
    pub fn new<I, S>(shell: impl Into<PathBuf>, subcommand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            shell: shell.into(),
            interactive: false,
            color: ColorMode::default(),
            verbose: false,
            debug: false,
            subcommand: subcommand.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether the constructed command should be echoed before spawning
    pub fn echo_enabled(&self) -> bool {
        self.verbose || self.debug
    }

    /// The command name, i.e. the first subcommand token
    pub fn program(&self) -> Option<&OsString> {
        self.subcommand.first()
    }
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL, Vec::<OsString>::new())
    }
}
