use std::fmt;
use std::str::FromStr;

/// Controls whether the result banner is wrapped in ANSI color codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    Never,
    Always,
    #[default]
    Auto,
}

impl ColorMode {
    /// Convert mode to its canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Always => "always",
            Self::Auto => "auto",
        }
    }

    /// Parse a color mode string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Resolve the mode against a destination stream.
    ///
    /// `Auto` colors only when the stream is an interactive terminal.
    pub fn enabled_for(&self, stream_is_terminal: bool) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Auto => stream_is_terminal,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            other => Err(format!(
                "invalid color mode: {other} (expected never, always, or auto)"
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
