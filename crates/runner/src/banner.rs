//! Result banner printed after the subcommand finishes

use crate::context::InvocationConfig;
use crate::quote::write_argv;
use nu_ansi_term::{Color, Style};
use std::borrow::Cow;
use std::io::{self, IsTerminal, Write};

/// Width of the divider lines framing the banner
pub const DIVIDER_WIDTH: usize = 78;

/// A writable stream that knows whether it is attached to a terminal
pub trait TerminalStream: Write {
    fn is_terminal_stream(&self) -> bool;
}

impl TerminalStream for io::StdoutLock<'_> {
    fn is_terminal_stream(&self) -> bool {
        self.is_terminal()
    }
}

impl TerminalStream for Vec<u8> {
    fn is_terminal_stream(&self) -> bool {
        false
    }
}

/// Already-localized banner text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLabels {
    pub divider: String,
    pub success: String,
    /// `{status}` is replaced with the exit status.
    pub failure: String,
}

impl BannerLabels {
    fn failure_label(&self, exit_status: i32) -> String {
        self.failure.replace("{status}", &exit_status.to_string())
    }
}

impl Default for BannerLabels {
    fn default() -> Self {
        Self {
            divider: "=".repeat(DIVIDER_WIDTH),
            success: "Success:".to_string(),
            failure: "Failed (status={status}):".to_string(),
        }
    }
}

/// Print the result banner for `exit_status` and hand the status back.
///
/// The banner is a divider, the success or failure label followed by the
/// quoted subcommand, and a closing divider. It is bold green or red when
/// `config.color` resolves to enabled for `out`.
pub fn show_result<S: TerminalStream + ?Sized>(
    config: &InvocationConfig,
    labels: &BannerLabels,
    exit_status: i32,
    out: &mut S,
) -> io::Result<i32> {
    let style = if !config.color.enabled_for(out.is_terminal_stream()) {
        Style::new()
    } else if exit_status == 0 {
        Color::Green.bold()
    } else {
        Color::Red.bold()
    };
    let label = if exit_status == 0 {
        Cow::Borrowed(labels.success.as_str())
    } else {
        Cow::Owned(labels.failure_label(exit_status))
    };

    write!(out, "{}", style.paint(format!("{}\n{}", labels.divider, label)))?;
    write_argv(out, "", &config.subcommand)?;
    writeln!(out, "{}", style.paint(labels.divider.as_str()))?;
    out.flush()?;

    Ok(exit_status)
}
