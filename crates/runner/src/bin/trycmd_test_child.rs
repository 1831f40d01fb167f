//! Child process with scripted outcomes for exercising the runner.
//!
//! The first argument selects a mode: `T` exit 0, `F` exit 1, `X` exit 129,
//! `A` abort, `S` raise SIGSEGV, `P` print each remaining argument on its
//! own line.

use nix::sys::signal::{raise, signal, SigHandler, Signal};
use std::process::ExitCode;

const HIGH_EXIT_STATUS: u8 = 129;

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let mode = args.next().map(|mode| mode.to_string_lossy().into_owned());

    match mode.as_deref() {
        Some("T") => ExitCode::SUCCESS,
        Some("F") => ExitCode::FAILURE,
        Some("X") => ExitCode::from(HIGH_EXIT_STATUS),
        Some("A") => std::process::abort(),
        Some("S") => {
            // std's stack overflow handler swallows a raised SIGSEGV
            // SAFETY: restoring the default disposition installs no handler code.
            let _ = unsafe { signal(Signal::SIGSEGV, SigHandler::SigDfl) };
            let _ = raise(Signal::SIGSEGV);
            ExitCode::FAILURE
        }
        Some("P") => {
            for arg in args {
                println!("{}", arg.to_string_lossy());
            }
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("trycmd_test_child: unrecognised mode {other:?}");
            ExitCode::from(2)
        }
    }
}
