//! Timer preset storage and persistence.
//!
//! Presets live in a TOML file under the data directory. The store is
//! append-only: presets can be created and listed, never edited or
//! removed. `list()` returns file order, which is creation order.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::TimerConfig;
use crate::error::StoreError;
use crate::storage::data_dir;

/// Storage for timer presets
pub struct ConfigStore {
    path: PathBuf,
}

/// Wrapper for serializing presets to TOML
#[derive(Default, Serialize, Deserialize)]
struct PresetsFile {
    presets: Vec<TimerConfig>,
}

impl ConfigStore {
    /// Open the preset store, seeding the built-in presets on first use.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::DataDir(e.to_string()))?;
        let store = Self {
            path: dir.join("presets.toml"),
        };

        if !store.path.exists() {
            store.save_all(&[TimerConfig::pomodoro(), TimerConfig::short_focus()])?;
        }

        Ok(store)
    }

    /// Store backed by an explicit file path (tests, custom layouts).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// All presets in creation order.
    pub fn list(&self) -> Result<Vec<TimerConfig>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: PresetsFile = toml::from_str(&content)?;
        Ok(file.presets)
    }

    /// Look up a preset by id.
    pub fn get(&self, id: &str) -> Result<TimerConfig, StoreError> {
        self.list()?
            .into_iter()
            .find(|config| config.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Validate and persist a new preset.
    ///
    /// # Errors
    ///
    /// Fails with a wrapped [`crate::ValidationError`] on bad input; the
    /// file is left untouched in that case.
    pub fn create(
        &self,
        name: &str,
        work_secs: u64,
        break_secs: u64,
        long_break_secs: u64,
        sessions_before_long_break: u32,
    ) -> Result<TimerConfig, StoreError> {
        let config = TimerConfig::new(
            name,
            work_secs,
            break_secs,
            long_break_secs,
            sessions_before_long_break,
        )?;
        let mut presets = self.list()?;
        presets.push(config.clone());
        self.save_all(&presets)?;
        tracing::info!(id = %config.id, name = %config.name, "preset created");
        Ok(config)
    }

    fn save_all(&self, presets: &[TimerConfig]) -> Result<(), StoreError> {
        let file = PresetsFile {
            presets: presets.to_vec(),
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Get the presets file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
