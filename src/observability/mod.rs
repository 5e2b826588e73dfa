//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; this module installs the
//! subscriber. `RUST_LOG` takes precedence, otherwise the level follows the
//! `-v` count:
//!
//! | flag   | level |
//! |--------|-------|
//! | none   | warn  |
//! | `-v`   | info  |
//! | `-vv`  | debug |
//! | `-vvv` | trace |

use tracing_subscriber::EnvFilter;

/// Level directive for a verbosity count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wsmrank={}", level_for_verbosity(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
