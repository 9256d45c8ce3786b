use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::storage::RecordStore;

/// Stores the record as one UTF-8 JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<ResumeRecord, AppError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || load_from_path(&path))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed loading record: {e}"))
            })?
    }

    async fn save(&self, record: &ResumeRecord) -> Result<(), AppError> {
        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || save_to_path(&record, &path))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed saving record: {e}"))
            })?
    }
}

/// Reads a record from `path`. A missing file is not an error: it yields the empty record.
///
/// Legacy LinkedIn/GitHub strings are upgraded during deserialization.
pub fn load_from_path(path: &Path) -> Result<ResumeRecord, AppError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "File {} not found. Using empty resume data.",
                path.display()
            );
            return Ok(ResumeRecord::default());
        }
        Err(e) => return Err(e.into()),
    };
    let record: ResumeRecord = serde_json::from_str(&text)?;
    info!("Resume data loaded from: {}", path.display());
    Ok(record)
}

/// Writes `record` as pretty JSON. The file is written to a sibling temp file first and then
/// renamed over `path`, so a failed write leaves the previous file intact.
pub fn save_to_path(record: &ResumeRecord, path: &Path) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, record)?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.persist(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e.error)))?;
    info!("Resume data saved to: {}", path.display());
    Ok(())
}
