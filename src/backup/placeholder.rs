use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use super::BackupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderOutcome {
    Created,
    AlreadyPresent,
}

/// Content of a fresh placeholder: an empty JSON array.
pub fn render() -> Result<String, BackupError> {
    Ok(serde_json::to_string_pretty(&Vec::<Value>::new())?)
}

/// Creates `path` with `content` unless something already exists there.
///
/// An existing file is never opened for reading or writing.
pub fn write_if_absent(path: &Path, content: &str) -> Result<PlaceholderOutcome, BackupError> {
    write_with(path, |file| file.write_all(content.as_bytes()))
}

/// Fills a sibling temp file and links it into place only once `fill`
/// succeeded, so a failed write never leaves `path` behind.
fn write_with<F>(path: &Path, fill: F) -> Result<PlaceholderOutcome, BackupError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    if path.exists() {
        return Ok(PlaceholderOutcome::AlreadyPresent);
    }

    let write_error = |source| BackupError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    fill(tmp.as_file_mut()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(PlaceholderOutcome::Created),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
            Ok(PlaceholderOutcome::AlreadyPresent)
        }
        Err(e) => Err(write_error(e.error)),
    }
}
