//! # Log File Setup
//!
//! Routes `tracing` output to a plain-text log file. The file is opened in
//! overwrite mode, so each run starts with an empty log while the database
//! keeps accumulating.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`. Honors `RUST_LOG`,
/// defaulting to `info`.
pub fn init_file_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("Failed to open log file `{}`: {e}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {e}"))
}
