//! Tracing setup. Logs go to stderr so stdout carries only the report.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "BACKEND_PROBE_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. `BACKEND_PROBE_LOG` overrides
/// `default_level` when it holds a valid filter. Safe to call more than once.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
