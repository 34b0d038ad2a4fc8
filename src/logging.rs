//! Logger set-up for the demo binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter applied when `RUST_LOG` is unset: this crate at `level`, every
/// dependency at `warn`.
fn default_filter(level: LevelFilter) -> String {
    format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Installs the global logger.
///
/// `verbose` lowers the crate filter to `debug`, which shows every mode
/// transition and action impulse. `RUST_LOG` still takes precedence, so
/// `RUST_LOG=strider=trace` exposes the per-tick force totals. Calling this
/// again once a logger is installed does nothing.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_env(Env::default().default_filter_or(default_filter(level)))
        .format_timestamp(None)
        .format_target(true)
        .try_init()
        .ok();
}
