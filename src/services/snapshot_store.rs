//! JSON file persistence for snapshot documents.

use crate::error::SnapshotError;
use crate::models::snapshot::SnapshotDocument;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document as pretty JSON. The file is written next to the
    /// target and renamed over it, so readers never see a partial document.
    pub async fn save(&self, document: &SnapshotDocument) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| self.io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(&self.path, e))?;

        info!(
            path = %self.path.display(),
            symbols = document.data.len(),
            "snapshot saved"
        );
        Ok(())
    }

    pub async fn load(&self) -> Result<SnapshotDocument, SnapshotError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(&self.path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
