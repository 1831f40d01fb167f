use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use trycmd_common::ColorMode;

const ENVIRONMENT_HELP: &str = "\
Environment:
  TRY_INTERACTIVE=1   Always execute commands in an interactive subshell
  TRY_COLOR=WHEN      Colorize the result banner (never, always, auto)
  TRY_DEBUG=1         Print diagnostic output on stderr
  SHELL=/bin/sh       The shell to use when executing the command";

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum ColorModeArg {
    Never,
    Always,
    Auto,
}

impl From<ColorModeArg> for ColorMode {
    fn from(value: ColorModeArg) -> Self {
        match value {
            ColorModeArg::Never => ColorMode::Never,
            ColorModeArg::Always => ColorMode::Always,
            ColorModeArg::Auto => ColorMode::Auto,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "try")]
#[command(
    version,
    about = "Run a command, display a standard result and pass on its exit status",
    long_about = None,
    after_help = ENVIRONMENT_HELP
)]
pub struct Cli {
    /// Execute the command in an interactive subshell (needed for aliases)
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Verbose output (echoes the command being run)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Colorize the result banner
    #[arg(long = "color", value_name = "WHEN")]
    pub color: Option<ColorModeArg>,

    /// Shell used to run the command (defaults to $SHELL or /bin/sh)
    ///
    /// An empty value falls back to the default.
    #[arg(
        long = "shell",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub shell: Option<PathBuf>,

    /// The command to run, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<OsString>,
}
