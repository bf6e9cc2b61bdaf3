use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("failed to create backup directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write placeholder {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render placeholder: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid table name '{0}'")]
    InvalidTableName(String),

    #[error("table '{0}' is listed more than once")]
    DuplicateTable(String),
}
