use std::path::PathBuf;

use tracing::{debug, info};

use super::placeholder::{self, PlaceholderOutcome};
use super::tables::{self, TableName};
use super::BackupError;
use crate::config::BackupConfig;

/// Ensures the backup directory and one placeholder per table exist.
#[derive(Debug, Clone)]
pub struct BackupInitializer {
    dir: PathBuf,
    tables: Vec<TableName>,
}

/// What a single run did, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<TableName>,
    pub skipped: Vec<TableName>,
}

impl InitReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.skipped.len()
    }
}

impl BackupInitializer {
    pub fn new(dir: impl Into<PathBuf>, tables: Vec<TableName>) -> Self {
        Self {
            dir: dir.into(),
            tables,
        }
    }

    pub fn from_config(config: &BackupConfig) -> Result<Self, BackupError> {
        let tables = tables::parse_table_list(&config.tables)?;
        Ok(Self::new(config.backup_dir(), tables))
    }

    pub fn initialize(&self) -> Result<InitReport, BackupError> {
        info!("preparing backup layout in {}", self.dir.display());

        std::fs::create_dir_all(&self.dir).map_err(|source| BackupError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let content = placeholder::render()?;
        let mut report = InitReport::default();

        for table in &self.tables {
            let path = self.dir.join(table.file_name());
            match placeholder::write_if_absent(&path, &content)? {
                PlaceholderOutcome::Created => {
                    info!(table = %table, "created placeholder {}", table.file_name());
                    report.created.push(table.clone());
                }
                PlaceholderOutcome::AlreadyPresent => {
                    debug!(table = %table, "keeping existing {}", path.display());
                    report.skipped.push(table.clone());
                }
            }
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "{} placeholders in place; exported data goes in {}",
            report.total(),
            self.dir.display()
        );

        Ok(report)
    }
}
