use super::ConfigError;
use crate::backup::tables::DEFAULT_TABLES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "backup.yaml";
pub const BACKUP_DIR_ENV: &str = "BACKUP_SCAFFOLD_DIR";

const BACKUP_DIR_NAME: &str = "backup";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_tables")]
    pub tables: Vec<String>,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            dir: None,
            tables: default_tables(),
        }
    }
}

impl BackupConfig {
    /// Configured directory, or `backup/` under the working directory.
    pub fn backup_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(dir),
            None => default_backup_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Config {
    /// Loads the config from `path` when one is named, otherwise from
    /// `backup.yaml` in the working directory if present, otherwise defaults.
    ///
    /// The result is not validated; callers apply their own overrides first.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::read_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub(crate) fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(BACKUP_DIR_ENV) {
            self.backup.dir = Some(value);
        }
    }
}

/// Relative, so it resolves against the working directory at run time.
pub fn default_backup_dir() -> PathBuf {
    PathBuf::from(BACKUP_DIR_NAME)
}

fn default_tables() -> Vec<String> {
    DEFAULT_TABLES.iter().map(|t| t.to_string()).collect()
}

fn default_log_level() -> String {
    "info".to_string()
}
