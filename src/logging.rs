use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,grocery_reviews=info,reqwest=warn";

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
