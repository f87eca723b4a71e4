//! calendart configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Configuration at ~/.config/calendart/config.toml
///
/// Adapters that extend the capability bit space declare their extra
/// capabilities here, so every process resolves the same names.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct CoreConfig {
    /// Extra capability names mapped to their bit mask
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub capabilities: BTreeMap<String, u32>,
}

impl CoreConfig {
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("Could not determine config directory".into()))?
            .join("calendart");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's configuration, falling back to defaults when no file exists.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let config: CoreConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            capabilities = config.capabilities.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> CoreResult<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
