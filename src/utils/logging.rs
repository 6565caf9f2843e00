// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for every subcommand.
///
/// `RUST_LOG` selects the filter (default `info`). Output goes to stderr so
/// `draft` and `analyze` can pipe their document or report from stdout, while
/// `serve` still shows its request spans on the terminal.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    tracing::debug!("Logging initialised");
}
