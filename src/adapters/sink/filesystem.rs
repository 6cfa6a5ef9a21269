//! Filesystem delivery sink

use super::DeliverySink;
use crate::domain::{ExtractError, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Writes each delivered file into an output directory
///
/// The directory is created on first delivery. File names must be plain
/// names; anything that would escape the directory is refused.
pub struct FileSystemSink {
    output_dir: PathBuf,
}

impl FileSystemSink {
    /// Create a sink writing into `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.output_dir.join(file_name)),
            _ => Err(ExtractError::Delivery(format!(
                "Refusing to write '{file_name}': file name must not contain path components"
            ))),
        }
    }
}

#[async_trait]
impl DeliverySink for FileSystemSink {
    async fn deliver_file(&self, file_name: &str, mime_type: &str, content: &str) -> Result<()> {
        let path = self.target_path(file_name)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                ExtractError::Delivery(format!(
                    "Failed to create output directory {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        tokio::fs::write(&path, content.as_bytes())
            .await
            .map_err(|e| {
                ExtractError::Delivery(format!("Failed to write {}: {e}", path.display()))
            })?;

        tracing::debug!(
            path = %path.display(),
            mime_type = %mime_type,
            bytes = content.len(),
            "File written"
        );

        Ok(())
    }
}
