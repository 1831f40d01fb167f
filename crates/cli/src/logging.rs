//! Diagnostic logging setup

use env_logger::Env;
use log::LevelFilter;

/// Install the stderr logger. `debug` raises the level to debug regardless
/// of `RUST_LOG`; otherwise `RUST_LOG` applies with a `warn` default.
///
/// Later calls are ignored, so tests may run the whole flow repeatedly.
pub fn init(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
