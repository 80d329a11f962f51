//! Configuration settings for Assay.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub limits: LimitsSettings,
}

impl Settings {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(settings)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [PathBuf::from("assay.toml"), PathBuf::from("config.toml")];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Settings::default())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend selector. `memory` is the in-process reference backend; an
    /// external persistence engine plugs in through the `RecordStore` trait.
    pub backend: StoreBackendType,
}

/// Store backend type enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendType {
    #[default]
    Memory,
}

/// Input size limits, in bytes. Zero disables a limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSettings {
    /// Maximum accepted size of a value submitted for analysis.
    pub max_value_bytes: usize,
    /// Maximum accepted size of a natural-language query sentence.
    pub max_sentence_bytes: usize,
}
