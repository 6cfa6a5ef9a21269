//! Snapshot-file record source
//!
//! Reads a JSON file holding an array of record collections, in the same
//! shape the REST backend returns. Useful for offline exports and for
//! replaying a captured backend response.

use super::traits::RecordSource;
use crate::domain::{CollectionName, RecordCollection, Result, SourceError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Record source backed by a JSON snapshot file
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    /// Create a source reading from `path`
    ///
    /// The file is read on every call so edits are picked up between runs.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> std::result::Result<Vec<RecordCollection>, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::ConnectionFailed(format!(
                "cannot read snapshot {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            SourceError::InvalidResponse(format!(
                "snapshot {} is not an array of collections: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn list_collection_names(&self) -> Result<Vec<CollectionName>> {
        let collections = self
            .load()
            .await
            .map_err(|e| SourceError::ListFetchFailed(e.to_string()))?;

        let mut names: Vec<CollectionName> = Vec::with_capacity(collections.len());
        for collection in collections {
            if !names.contains(&collection.source_name) {
                names.push(collection.source_name);
            }
        }
        Ok(names)
    }

    async fn fetch_record_collections(
        &self,
        names: &[CollectionName],
    ) -> Result<Vec<RecordCollection>> {
        let mut available = self
            .load()
            .await
            .map_err(|e| SourceError::RecordFetchFailed(e.to_string()))?;

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            match available.iter().position(|c| &c.source_name == name) {
                Some(index) => selected.push(available.swap_remove(index)),
                None => tracing::debug!(
                    collection = %name,
                    snapshot = %self.path.display(),
                    "Requested collection not present in snapshot"
                ),
            }
        }

        Ok(selected)
    }

    fn describe(&self) -> String {
        format!("file({})", self.path.display())
    }
}
