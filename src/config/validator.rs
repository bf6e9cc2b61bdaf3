use thiserror::Error;

use super::parser::Config;
use crate::backup::tables;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.backup.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "backup.dir cannot be empty".to_string(),
                ));
            }
        }

        if self.backup.tables.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "backup.tables cannot be empty".to_string(),
            ));
        }

        tables::parse_table_list(&self.backup.tables)
            .map_err(|e| ConfigError::InvalidConfig(format!("backup.tables: {e}")))?;

        Ok(())
    }
}
