use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SBSH_LOG";

/// Sends `tracing` output to stderr. Silent unless `SBSH_LOG` is set or
/// `debug` is requested, so diagnostics stay the only stderr output.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "sbsh=debug" } else { "off" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
