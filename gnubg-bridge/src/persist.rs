//! Snapshot persistence: one indented JSON document per match reference.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to create output directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write snapshot to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the record to `{output_dir}/{match_ref}.json`, creating the
/// directory if absent.
///
/// Any prior file is overwritten wholesale; there is no field-level
/// merge with earlier contents. Callers log failures and do not retry.
pub fn write_snapshot(
    record: &Value,
    output_dir: &Path,
    match_ref: &str,
) -> Result<PathBuf, PersistError> {
    fs::create_dir_all(output_dir).map_err(|source| PersistError::CreateDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(format!("{match_ref}.json"));
    let body = serde_json::to_string_pretty(record)?;
    fs::write(&path, body).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "snapshot written");
    Ok(path)
}
