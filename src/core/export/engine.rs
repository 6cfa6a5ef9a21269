//! CSV export engine
//!
//! Turns fetched record collections into CSV documents and hands each one to
//! a delivery sink. Every collection is processed on its own: an empty
//! collection is skipped, a collection whose cells cannot be rendered is
//! reported as failed, and neither stops the collections after it.

use super::render::{derive_header, render_csv};
use super::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::adapters::sink::DeliverySink;
use crate::config::{ExtractConfig, HeaderSource};
use crate::domain::{CollectionName, CsvDocument, RecordCollection, RenderError, Result};
use crate::log_collection_exported;
use std::time::Instant;

/// Result of rendering a single collection
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionOutcome {
    /// The collection produced a document
    Rendered(CsvDocument),
    /// The collection had no records
    Skipped(CollectionName),
    /// A cell could not be rendered
    Failed(RenderError),
}

impl CollectionOutcome {
    /// The rendered document, if any
    pub fn document(&self) -> Option<&CsvDocument> {
        match self {
            CollectionOutcome::Rendered(doc) => Some(doc),
            _ => None,
        }
    }
}

/// CSV export engine
#[derive(Debug, Clone)]
pub struct ExportEngine {
    header_source: HeaderSource,
    mime_type: String,
    dry_run: bool,
}

impl ExportEngine {
    /// Create an engine with the given header policy and delivery MIME type
    pub fn new(header_source: HeaderSource, mime_type: impl Into<String>) -> Self {
        Self {
            header_source,
            mime_type: mime_type.into(),
            dry_run: false,
        }
    }

    /// Create an engine from the export and application sections
    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(config.export.header_source, config.export.mime_type.clone())
            .with_dry_run(config.application.dry_run)
    }

    /// Render documents without delivering them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn header_source(&self) -> HeaderSource {
        self.header_source
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Render one collection
    ///
    /// Returns `Ok(None)` for a collection without records.
    pub fn render_collection(
        &self,
        collection: &RecordCollection,
    ) -> std::result::Result<Option<CsvDocument>, RenderError> {
        if collection.is_empty() {
            return Ok(None);
        }

        let name = collection.source_name.as_str();
        let header = derive_header(&collection.records, self.header_source);
        let content = render_csv(name, &header, &collection.records)?;

        Ok(Some(CsvDocument::new(
            collection.source_name.clone(),
            content,
            collection.len(),
        )))
    }

    /// Render every collection, isolating failures per collection
    ///
    /// The output has one entry per input collection, in input order.
    /// Rendering is deterministic: identical input yields identical content.
    pub fn export_all(&self, collections: &[RecordCollection]) -> Vec<CollectionOutcome> {
        collections
            .iter()
            .map(|collection| match self.render_collection(collection) {
                Ok(Some(doc)) => CollectionOutcome::Rendered(doc),
                Ok(None) => {
                    tracing::debug!(
                        collection = %collection.source_name,
                        "Skipping collection without records"
                    );
                    CollectionOutcome::Skipped(collection.source_name.clone())
                }
                Err(e) => {
                    tracing::error!(
                        collection = %collection.source_name,
                        error = %e,
                        "Failed to render collection"
                    );
                    CollectionOutcome::Failed(e)
                }
            })
            .collect()
    }

    /// Hand one document to the sink
    ///
    /// # Errors
    ///
    /// Returns the sink's error for this document.
    pub async fn deliver(&self, doc: &CsvDocument, sink: &dyn DeliverySink) -> Result<()> {
        sink.deliver_file(doc.file_name(), &self.mime_type, doc.content())
            .await
    }

    /// Render and deliver every collection, collecting per-collection results
    pub async fn export_and_deliver(
        &self,
        collections: &[RecordCollection],
        sink: &dyn DeliverySink,
    ) -> ExportSummary {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = self.dry_run;
        summary.total_collections = collections.len();

        for outcome in self.export_all(collections) {
            match outcome {
                CollectionOutcome::Skipped(_) => summary.collections_skipped += 1,
                CollectionOutcome::Failed(e) => {
                    summary.render_failures += 1;
                    let context = format!("collection={}", e.collection());
                    summary.add_error(
                        ExportError::new(ExportErrorType::Render, e.to_string())
                            .with_context(context),
                    );
                }
                CollectionOutcome::Rendered(doc) => {
                    summary.documents_rendered += 1;
                    summary.total_records += doc.record_count();

                    if self.dry_run {
                        tracing::info!(
                            file_name = %doc.file_name(),
                            records = doc.record_count(),
                            "Dry run - document rendered but not delivered"
                        );
                        continue;
                    }

                    match self.deliver(&doc, sink).await {
                        Ok(()) => {
                            log_collection_exported!(
                                doc.source_name(),
                                doc.file_name(),
                                doc.record_count()
                            );
                            summary.add_delivered_file(doc.file_name());
                        }
                        Err(e) => {
                            tracing::error!(
                                file_name = %doc.file_name(),
                                error = %e,
                                "Failed to deliver document"
                            );
                            summary.delivery_failures += 1;
                            summary.add_error(
                                ExportError::new(ExportErrorType::Delivery, e.to_string())
                                    .with_context(format!("file={}", doc.file_name())),
                            );
                        }
                    }
                }
            }
        }

        summary.with_duration(start_time.elapsed())
    }
}

impl Default for ExportEngine {
    fn default() -> Self {
        Self::new(HeaderSource::default(), "text/plain")
    }
}
