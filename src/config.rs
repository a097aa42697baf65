use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::MAX_VOLUME;

fn default_initial_volume() -> f32 {
    MAX_VOLUME
}

fn default_step() -> f32 {
    0.05
}

/// Startup defaults for a volume control.
///
/// Only read at startup; the live volume is never written back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Raw initial volume, clamped to [0.0, 1.0] when the controller is built
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f32,

    /// Increment used by volume up/down, in (0.0, 1.0]
    #[serde(default = "default_step")]
    pub step: f32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            step: default_step(),
        }
    }
}

impl VolumeConfig {
    /// Load configuration from the platform config directory.
    /// Falls back to defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let load_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::LoadFailed {
                path: path.display().to_string(),
                source,
            }
        };

        let content = fs::read_to_string(path).map_err(|e| load_failed(e.into()))?;
        let config: VolumeConfig =
            serde_json::from_str(&content).map_err(|e| load_failed(e.into()))?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::SaveFailed {
                path: path.display().to_string(),
                source,
            }
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(e.into()))?;
        fs::write(path, json).map_err(|e| save_failed(e.into()))?;

        tracing::debug!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Check values that clamping cannot repair
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0 && self.step <= MAX_VOLUME) {
            return Err(ConfigError::Invalid(format!(
                "step must be in (0, 1], got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("VolumeController").join("config.json"))
    }
}
