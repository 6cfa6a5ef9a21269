//! In-memory delivery sink

use super::DeliverySink;
use crate::domain::{ExtractError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// A file handed to a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

/// Keeps delivered files in memory
///
/// Used when embedding the pipeline in another program and in tests. Names
/// listed with [`MemorySink::failing_on`] are refused, which lets callers
/// exercise per-document delivery failures.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<DeliveredFile>>,
    refused: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that refuses the given file names
    pub fn failing_on<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: Mutex::new(Vec::new()),
            refused: file_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Files delivered so far, in delivery order
    pub fn files(&self) -> Vec<DeliveredFile> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_default()
    }

    /// Content of the delivered file with the given name
    pub fn content_of(&self, file_name: &str) -> Option<String> {
        self.files()
            .into_iter()
            .find(|f| f.file_name == file_name)
            .map(|f| f.content)
    }
}

#[async_trait]
impl DeliverySink for MemorySink {
    async fn deliver_file(&self, file_name: &str, mime_type: &str, content: &str) -> Result<()> {
        if self.refused.iter().any(|name| name == file_name) {
            return Err(ExtractError::Delivery(format!(
                "Sink refused {file_name}"
            )));
        }

        let mut files = self
            .files
            .lock()
            .map_err(|_| ExtractError::Delivery("Memory sink lock poisoned".to_string()))?;
        files.push(DeliveredFile {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
