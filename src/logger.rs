//! Diagnostic logging for slf4j-migrate
//!
//! The progress transcript is printed on stdout and already carries migration
//! warnings and per-file failures; those are traced at `debug` so stderr does
//! not repeat them. By default only problems the transcript cannot show (such
//! as unreadable directory entries) reach stderr.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const DEFAULT_FILTER: &str = "slf4j_migrate=warn";

/// Build the filter from `RUST_LOG`, falling back to warnings only
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the stderr logging subscriber
pub fn init_logging() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();

    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(build_filter(rust_log.as_deref()));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
