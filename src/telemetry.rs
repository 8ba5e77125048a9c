use std::io;

use tracing_subscriber::EnvFilter;

/// Initialise tracing for the dashboard.
///
/// The alternate screen owns stdout, so diagnostics go to stderr; redirect
/// with `2>cryptofolio.log` to capture them. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .compact()
        .init();
}
