mod settings;
mod state_store;

pub use settings::{LoggingSettings, SamplerSettings, Settings};
pub use state_store::StateStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/uptime-watcher[-dev]/` based on UPTIME_WATCHER_ENV.
///
/// Set UPTIME_WATCHER_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("UPTIME_WATCHER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("uptime-watcher-dev")
    } else {
        base_dir.join("uptime-watcher")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Path of the append-only log file inside the data directory.
pub fn log_path() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("uptime-watcher.log"))
}
