//! Shell-safe argument printing
//!
//! Arguments made only of ASCII alphanumerics and `_ - . /` print as-is.
//! Anything else is wrapped in single quotes, with each embedded quote
//! written as `'\''`. Pasting the output into a POSIX shell reproduces the
//! original bytes.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

const ESCAPED_QUOTE: &[u8] = b"'\\''";

/// Whether `byte` forces an argument to be quoted
pub fn needs_quoting(byte: u8) -> bool {
    !(byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'.' | b'/'))
}

/// Quote `arg` for display, borrowing it when no quoting is needed.
pub fn quote_arg(arg: &OsStr) -> Cow<'_, OsStr> {
    match quote_bytes(arg.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(arg),
        Cow::Owned(bytes) => Cow::Owned(OsString::from_vec(bytes)),
    }
}

fn quote_bytes(arg: &[u8]) -> Cow<'_, [u8]> {
    if !arg.is_empty() && !arg.iter().copied().any(needs_quoting) {
        return Cow::Borrowed(arg);
    }

    let quotes = arg.iter().filter(|byte| **byte == b'\'').count();
    let mut quoted = Vec::with_capacity(arg.len() + 2 + quotes * (ESCAPED_QUOTE.len() - 1));
    quoted.push(b'\'');
    for &byte in arg {
        if byte == b'\'' {
            quoted.extend_from_slice(ESCAPED_QUOTE);
        } else {
            quoted.push(byte);
        }
    }
    quoted.push(b'\'');
    Cow::Owned(quoted)
}

/// Write a single argument, quoted as necessary.
pub fn write_arg<W: Write + ?Sized>(out: &mut W, arg: &OsStr) -> io::Result<()> {
    out.write_all(&quote_bytes(arg.as_bytes()))
}

/// Write `prefix`, then each argument preceded by a space, then a newline.
pub fn write_argv<W, I, S>(out: &mut W, prefix: &str, args: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    out.write_all(prefix.as_bytes())?;
    for arg in args {
        out.write_all(b" ")?;
        write_arg(out, arg.as_ref())?;
    }
    out.write_all(b"\n")
}
