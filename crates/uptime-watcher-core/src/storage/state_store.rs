//! Flat key-value persistence for [`ReminderState`].
//!
//! The state lives at `~/.config/uptime-watcher/state.toml` as six
//! top-level keys. Loading merges whatever is present over the defaults.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, StoreError};
use crate::reminder::ReminderState;

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at the default location inside the data directory.
    pub fn open() -> Result<Self, ConfigError> {
        Ok(Self::at(data_dir()?.join("state.toml")))
    }

    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<ReminderState, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ReminderState::default())
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Read the state file, falling back to defaults when it is unreadable.
    pub fn load(&self) -> ReminderState {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "failed to load reminder state, using defaults");
                ReminderState::default()
            }
        }
    }

    /// Persist the state, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, state: &ReminderState) -> Result<(), StoreError> {
        let content = toml::to_string(state)?;
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(&self.path, content).map_err(io_err)
    }
}
