//! Diagnostic logging setup.
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.

use tracing_subscriber::{EnvFilter, prelude::*};

use crate::domain::config::LogConfig;

/// Overrides the configured filter, e.g. `MODELPACK_LOG=modelpack_cli=debug`.
pub const LOG_ENV: &str = "MODELPACK_LOG";
/// Set to `1` or `true` to force JSON log lines.
pub const LOG_JSON_ENV: &str = "MODELPACK_LOG_JSON";

/// Initialize tracing once at process startup. Later calls are no-ops.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let json = config.json
        || std::env::var(LOG_JSON_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let _ = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}
