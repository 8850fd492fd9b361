//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. Variables prefixed with `FLEETCTL_` override YAML values; for
//! nested fields use double underscores, e.g. `FLEETCTL_DATABASE__URL` sets
//! `database.url`.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://fleet.db`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://fleet.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    /// Load configuration, merging the YAML file (if present) with
    /// `FLEETCTL_`-prefixed environment variables.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("FLEETCTL_").split("__"))
            .extract()?;

        Ok(config)
    }
}
