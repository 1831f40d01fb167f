//! Shared vocabulary for the try command wrapper

mod settings;

pub use settings::ColorMode;

/// Shell used when neither `--shell` nor `$SHELL` names one.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Environment variable names read by the configuration layer
pub mod env_vars {
    pub const INTERACTIVE: &str = "TRY_INTERACTIVE"; // Non-zero forces an interactive subshell
    pub const DEBUG: &str = "TRY_DEBUG"; // Non-zero enables diagnostics on stderr
    pub const COLOR: &str = "TRY_COLOR"; // never | always | auto
    pub const SHELL: &str = "SHELL"; // Shell hosting the subcommand
}

/// Exit codes following Bash conventions
pub mod exit_codes {
    /// Added to the signal number when a subcommand is killed by a signal.
    pub const SIGNAL_BASE: i32 = 128;
    /// The subshell could not be started at all.
    pub const COMMAND_NOT_FOUND: i32 = 127;
    /// Catch-all for terminations that are neither an exit nor a signal.
    pub const ABNORMAL: i32 = 255;
    /// Invalid options or a missing subcommand.
    pub const USAGE: i32 = 1;
}
