//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use std::fmt;
use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Number of collections handed to the engine
    pub total_collections: usize,

    /// Number of collections that produced a document
    pub documents_rendered: usize,

    /// Number of collections skipped for having no records
    pub collections_skipped: usize,

    /// Number of collections that failed to render
    pub render_failures: usize,

    /// Number of documents the sink refused
    pub delivery_failures: usize,

    /// Total records across rendered documents
    pub total_records: usize,

    /// File names delivered, in delivery order
    pub delivered_files: Vec<String>,

    /// Errors encountered during export
    pub errors: Vec<ExportError>,

    /// Duration of the export
    pub duration: Duration,

    /// Documents were rendered but not delivered
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_collections: 0,
            documents_rendered: 0,
            collections_skipped: 0,
            render_failures: 0,
            delivery_failures: 0,
            total_records: 0,
            delivered_files: Vec::new(),
            errors: Vec::new(),
            duration: Duration::from_secs(0),
            dry_run: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Record a delivered file
    pub fn add_delivered_file(&mut self, file_name: impl Into<String>) {
        self.delivered_files.push(file_name.into());
    }

    /// Check if every non-empty collection was rendered and delivered
    pub fn is_successful(&self) -> bool {
        self.render_failures == 0 && self.delivery_failures == 0 && self.errors.is_empty()
    }

    /// Get success rate as a percentage of non-empty collections
    pub fn success_rate(&self) -> f64 {
        let attempted = self.total_collections.saturating_sub(self.collections_skipped);
        if attempted == 0 {
            return 100.0;
        }
        let succeeded = self.documents_rendered.saturating_sub(self.delivery_failures);
        (succeeded as f64 / attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_collections = self.total_collections,
            rendered = self.documents_rendered,
            delivered = self.delivered_files.len(),
            skipped = self.collections_skipped,
            render_failures = self.render_failures,
            delivery_failures = self.delivery_failures,
            total_records = self.total_records,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = %error.error_type,
                    message = %error.message,
                    context = ?error.context,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} collection(s) exported, {} record(s)",
            self.documents_rendered.saturating_sub(self.delivery_failures),
            self.total_collections,
            self.total_records
        )?;
        if self.collections_skipped > 0 {
            write!(f, ", {} empty", self.collections_skipped)?;
        }
        let failed = self.render_failures + self.delivery_failures;
        if failed > 0 {
            write!(f, ", {failed} failed")?;
        }
        Ok(())
    }
}

/// Type of export error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Record source could not list or fetch
    Fetch,
    /// A collection could not be rendered
    Render,
    /// The sink refused a document
    Delivery,
    /// Workflow could not proceed
    Workflow,
    /// Configuration error
    Configuration,
    /// Unknown error
    Unknown,
}

impl fmt::Display for ExportErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportErrorType::Fetch => "fetch",
            ExportErrorType::Render => "render",
            ExportErrorType::Delivery => "delivery",
            ExportErrorType::Workflow => "workflow",
            ExportErrorType::Configuration => "configuration",
            ExportErrorType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Export error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g., collection or file name)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new();

        assert_eq!(summary.total_collections, 0);
        assert_eq!(summary.documents_rendered, 0);
        assert_eq!(summary.render_failures, 0);
        assert_eq!(summary.duration, Duration::from_secs(0));
        assert!(summary.errors.is_empty());
        assert!(summary.delivered_files.is_empty());
        assert!(!summary.dry_run);
    }

    #[test]
    fn test_export_summary_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_secs(3));

        assert_eq!(summary.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_export_summary_is_successful() {
        let mut summary = ExportSummary::new();
        summary.total_collections = 2;
        summary.documents_rendered = 2;

        assert!(summary.is_successful());

        summary.render_failures = 1;
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_export_summary_success_rate() {
        let mut summary = ExportSummary::new();
        summary.total_collections = 5;
        summary.collections_skipped = 1;
        summary.documents_rendered = 3;

        assert_eq!(summary.success_rate(), 75.0);

        let empty = ExportSummary::new();
        assert_eq!(empty.success_rate(), 100.0);
    }

    #[test]
    fn test_export_summary_display() {
        let mut summary = ExportSummary::new();
        summary.total_collections = 3;
        summary.documents_rendered = 1;
        summary.collections_skipped = 1;
        summary.render_failures = 1;
        summary.total_records = 4;

        assert_eq!(
            summary.to_string(),
            "1 of 3 collection(s) exported, 4 record(s), 1 empty, 1 failed"
        );
    }

    #[test]
    fn test_export_error_with_context() {
        let error = ExportError::new(ExportErrorType::Render, "bad cell".to_string())
            .with_context("collection=Case".to_string());

        assert_eq!(error.error_type, ExportErrorType::Render);
        assert_eq!(error.context.as_deref(), Some("collection=Case"));
        assert_eq!(error.error_type.to_string(), "render");
    }

    #[test]
    fn test_export_summary_add_error() {
        let mut summary = ExportSummary::new();
        summary.add_error(ExportError::new(
            ExportErrorType::Delivery,
            "disk full".to_string(),
        ));

        assert_eq!(summary.errors.len(), 1);
        assert!(!summary.is_successful());
    }
}
