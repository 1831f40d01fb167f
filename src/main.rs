//! try - run a command, display a standard result and pass on its exit status

use std::process::ExitCode;
use trycmd_common::exit_codes;

fn main() -> ExitCode {
    match trycmd_cli::run_try() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::ABNORMAL as u8)),
        Err(e) => {
            eprintln!("try error: {e:?}");
            ExitCode::from(exit_codes::ABNORMAL as u8)
        }
    }
}
