use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cashflow_core::fs::write_atomic;

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "cashflow-planner";

/// Reads and writes the single `config.json` for the planner.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// `<base>/config/config.json`; used for relocated homes and tests.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join("config").join(CONFIG_FILE))
    }

    /// Platform config directory, e.g. `~/.config/cashflow-planner/config.json`.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// A config that was never saved loads as [`Config::default`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.config_path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}
