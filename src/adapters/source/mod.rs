//! Record source adapters
//!
//! - [`HttpRecordSource`] - REST backend
//! - [`FileRecordSource`] - JSON snapshot file

pub mod file;
pub mod http;
pub mod traits;

pub use file::FileRecordSource;
pub use http::HttpRecordSource;
pub use traits::RecordSource;

use crate::config::{SourceConfig, SourceKind};
use crate::domain::{ExtractError, Result};
use std::sync::Arc;

/// Create a record source based on the configuration
///
/// # Errors
///
/// Returns a configuration error if the settings required by the selected
/// source kind are missing.
pub fn create_record_source(config: &SourceConfig) -> Result<Arc<dyn RecordSource>> {
    match config.kind {
        SourceKind::Http => {
            let source = HttpRecordSource::new(config)?;
            tracing::info!(source = %source.describe(), "Created HTTP record source");
            Ok(Arc::new(source))
        }
        SourceKind::File => {
            let path = config.snapshot_path.as_deref().ok_or_else(|| {
                ExtractError::Configuration(
                    "source.snapshot_path is required when source.kind = 'file'".to_string(),
                )
            })?;
            let source = FileRecordSource::new(path);
            tracing::info!(source = %source.describe(), "Created file record source");
            Ok(Arc::new(source))
        }
    }
}
