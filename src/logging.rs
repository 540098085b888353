//! Log setup.
//!
//! The terminal belongs to the game, so logs go to a file and never to
//! stdout/stderr while the alternate screen is up.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Installing a
/// second subscriber (tests, embedding) is not an error.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
