//! File-backed configuration store

use std::fs;
use std::path::PathBuf;

use monetization_core::{ConfigStore, Mapping, MonetizationError, MonetizationResult};

/// Configuration mapping stored as a JSON object in a single named file.
///
/// Keys are kept exactly as written, so a read followed by a write leaves
/// the mapping unchanged.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for FileConfigStore {
    fn read_config(&self) -> MonetizationResult<Mapping> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Configuration file missing, reading as empty");
            return Ok(Mapping::new());
        }

        let body = fs::read_to_string(&self.path)?;
        if body.trim().is_empty() {
            return Ok(Mapping::new());
        }

        serde_json::from_str::<Mapping>(&body).map_err(|e| {
            MonetizationError::ConfigStore(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_config(&self, config: &Mapping) -> MonetizationResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, body)?;

        tracing::debug!(path = %self.path.display(), keys = config.len(), "Configuration written");
        Ok(())
    }
}
