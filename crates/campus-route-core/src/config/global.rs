//! Global configuration for campus-route (stored in ~/.config/campus-route/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "campus-route";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUS_ROUTE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct GlobalConfig {
    /// Campus map file used when `--map` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_path: Option<PathBuf>,

    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RouteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read global config from", path.display(), e))?;

        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| RouteError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            RouteError::io_operation("create config directory", config_dir.display(), e)
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| RouteError::io_operation("write config to", path.display(), e))?;

        Ok(())
    }
}
