// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

pub const APP_ID: &str = "io.github.pokecatalog";

const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// How many entries the initial list request asks for
    pub catalog_limit: usize,
    /// Requests in flight per batch while downloading the catalog
    pub concurrency: usize,
    pub items_per_page: usize,
    /// Keep a snapshot of the downloaded catalog and reuse it on the next run
    pub cache_catalog: bool,
    /// Where favorites and the catalog snapshot live, defaults to the platform data dir
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://pokeapi.co/api/v2"),
            catalog_limit: 1000,
            concurrency: 20,
            items_per_page: 10,
            cache_catalog: false,
            data_dir: None,
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_ID).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads the config at `path`, a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: Config = ron::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(String::from(
                "api_base_url must not be empty",
            )));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(String::from(
                "concurrency must be at least 1",
            )));
        }
        if self.items_per_page == 0 {
            return Err(ConfigError::Invalid(String::from(
                "items_per_page must be at least 1",
            )));
        }
        Ok(())
    }

    /// Directory holding favorites and the catalog snapshot
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_ID)
        })
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir().join("catalog_cache.ron")
    }
}
