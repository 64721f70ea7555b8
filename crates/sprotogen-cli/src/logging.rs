//! Log output for the CLI
//!
//! Diagnostics go to stderr so generated source can be piped from stdout.
//! `SPROTOGEN_LOG` takes an `EnvFilter` directive and wins over `--log-level`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SPROTOGEN_LOG";

/// Install the global subscriber
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
