//! Logging configuration using tracing

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr fmt subscriber. `RUST_LOG` overrides the default
/// `info` level, which includes the one-line-per-record load output;
/// `RUST_LOG=pop_core=warn` silences it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
