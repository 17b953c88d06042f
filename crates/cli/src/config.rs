//! Configuration management for the CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration, merged from the config file and DBRISK_* variables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Path to the classifier artifact
    pub model_path: Option<String>,
    /// Expected SHA-256 checksum of the artifact (hex)
    pub model_checksum: Option<String>,
    /// Version string reported for the artifact
    pub model_version: Option<String>,
    /// Template used when none is given on the command line
    pub default_template: Option<String>,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let settings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(config::Environment::with_prefix("DBRISK"))
            .build()
            .context("Failed to load configuration")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("dbrisk").join("config.json"))
    }
}
