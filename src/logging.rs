//! Tracing subscriber setup
//!
//! `RUST_LOG` controls the filter (default `info`). Set
//! `EXPENSE_TRACKER_LOG_FORMAT=json` for one JSON object per event. Events go
//! to stderr so CLI output on stdout stays clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "EXPENSE_TRACKER_LOG_FORMAT";

/// Install the global subscriber
pub fn init_tracing() {
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
