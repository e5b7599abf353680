//! Store configuration
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: WP__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data: DataConfig,
    pub backup: BackupConfig,
}

/// Collection file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the collection files
    pub directory: String,
    pub nutrition_file: String,
    pub routines_file: String,
}

/// Backup behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory under the data directory holding snapshots
    pub directory: String,
    /// Snapshots retained by a prune pass
    pub max_backups: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                directory: "data".to_string(),
                nutrition_file: "nutrition_plans.json".to_string(),
                routines_file: "exercise_routines.json".to_string(),
            },
            backup: BackupConfig {
                directory: "backups".to_string(),
                max_backups: 30,
            },
        }
    }
}

impl StoreConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with WP__ prefix
    ///    e.g., WP__DATA__DIRECTORY=/var/lib/wellness sets data.directory
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&StoreConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("WP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path of the nutrition-plan collection file
    pub fn nutrition_path(&self) -> PathBuf {
        PathBuf::from(&self.data.directory).join(&self.data.nutrition_file)
    }

    /// Path of the exercise-routine collection file
    pub fn routines_path(&self) -> PathBuf {
        PathBuf::from(&self.data.directory).join(&self.data.routines_file)
    }

    /// Directory holding backup snapshots
    pub fn backups_dir(&self) -> PathBuf {
        PathBuf::from(&self.data.directory).join(&self.backup.directory)
    }
}
