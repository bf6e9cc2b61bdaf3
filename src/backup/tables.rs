use std::collections::HashSet;
use std::fmt;

use super::BackupError;

/// Tables exported by the manual backup, in the order placeholders are created.
pub const DEFAULT_TABLES: [&str; 22] = [
    "products",
    "inventory_movements",
    "product_stock_by_warehouse",
    "product_locations",
    "product_batches",
    "product_qr_assets",
    "product_label_assets",
    "profiles",
    "suppliers",
    "product_suppliers",
    "audit_logs",
    "user_settings",
    "user_login_events",
    "app_settings",
    "ai_suggestions",
    "ai_prediction_cache",
    "chat_rooms",
    "chat_messages",
    "batch_defect_reports",
    "product_modification_history",
    "scanner_users",
    "user_permissions",
];

const PLACEHOLDER_EXTENSION: &str = "json";

/// A table identifier that is safe to use as a file stem.
///
/// Lowercase ASCII letters, digits and `_`, not starting with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn parse(name: &str) -> Result<Self, BackupError> {
        let mut chars = name.chars();
        let valid_head = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
        let valid_tail = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if valid_head && valid_tail {
            Ok(Self(name.to_string()))
        } else {
            Err(BackupError::InvalidTableName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, PLACEHOLDER_EXTENSION)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates a table list, keeping its order and rejecting repeats.
pub fn parse_table_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<TableName>, BackupError> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut tables = Vec::with_capacity(names.len());

    for name in names {
        let table = TableName::parse(name.as_ref())?;
        if !seen.insert(table.clone()) {
            return Err(BackupError::DuplicateTable(table.0));
        }
        tables.push(table);
    }

    Ok(tables)
}
