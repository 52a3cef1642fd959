use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strategy::PoolId;

use crate::error::Result;

/// Prefix of environment variables that override file settings,
/// e.g. `STRATEGY_BUILDER_LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "STRATEGY_BUILDER";

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// JSON file holding the pools and assets.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Pools offered for allocation. Empty offers every catalog pool.
    #[serde(default)]
    pub selected_pools: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            selected_pools: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl BuilderConfig {
    /// Reads the optional config file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Applies command-line values on top of the loaded settings.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        selected: Vec<String>,
    ) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        if !selected.is_empty() {
            self.selected_pools = selected;
        }
        self
    }

    pub fn selected_pool_ids(&self) -> Vec<PoolId> {
        self.selected_pools
            .iter()
            .map(|id| PoolId::new(id.as_str()))
            .collect()
    }
}
