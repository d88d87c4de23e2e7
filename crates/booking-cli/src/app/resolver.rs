//! Path resolution for the config file and booking store.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, BookingsConfig};

/// Resolve the config file path, checking BOOKINGS_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("BOOKINGS_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store directory: `--store`/`BOOKINGS_STORE`, then the
/// config file, then the XDG data directory.
pub fn resolve_store_dir(cli: &Cli, config: Option<&BookingsConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

/// Error message when the booking store does not exist yet.
pub fn missing_store_message(path: &Path) -> String {
    format!("No booking store found at {}", path.display())
}
