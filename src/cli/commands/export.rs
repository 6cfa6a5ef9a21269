//! Export command implementation
//!
//! This module implements the `export` command: load the option list, apply
//! the selection, run one export request and report the outcome.

use crate::adapters::notify::ConsoleNotifier;
use crate::adapters::sink::FileSystemSink;
use crate::adapters::source::create_record_source;
use crate::config::{load_config, HeaderSource};
use crate::core::export::ExportEngine;
use crate::core::selection::SelectionCoordinator;
use crate::core::workflow::{WorkflowOutcome, WorkflowReport};
use crate::domain::{CollectionName, ExtractError};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Collections to export (comma-separated); defaults to the configured
    /// selection, or every available collection
    #[arg(long, value_delimiter = ',')]
    pub collections: Vec<String>,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Dry run mode - render CSV files without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Override the header policy (first_record or union_of_all_records)
    #[arg(long, value_name = "POLICY")]
    pub header_source: Option<HeaderSource>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if !self.collections.is_empty() {
            tracing::info!(collections = ?self.collections, "Overriding selection from CLI");
            config.selection.collections = self.collections.clone();
        }

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        if let Some(header_source) = self.header_source {
            tracing::info!(header_source = %header_source, "Overriding header source from CLI");
            config.export.header_source = header_source;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no files will be written");
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        let source = match create_record_source(&config.source) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create record source");
                eprintln!("Failed to initialize record source: {e}");
                return Ok(2);
            }
        };

        let mut coordinator = SelectionCoordinator::new(
            source,
            Arc::new(FileSystemSink::new(&config.export.output_dir)),
            Arc::new(ConsoleNotifier::new()),
            ExportEngine::from_config(&config),
        )
        .with_prune_stale(config.selection.prune_stale);

        coordinator.refresh_available().await;

        let selection = if config.selection.collections.is_empty() {
            coordinator.available().to_vec()
        } else {
            CollectionName::parse_list(&config.selection.collections)
        };
        coordinator.update_selection(selection);

        println!("🚀 Starting export...");
        println!();

        let report = coordinator.submit().await;

        Ok(print_report(&report, &config.export.output_dir))
    }
}

fn print_report(report: &WorkflowReport, output_dir: &str) -> i32 {
    println!();
    match &report.outcome {
        WorkflowOutcome::Succeeded(summary) => {
            println!("📊 Export Summary:");
            println!("  Collections Requested: {}", report.requested.len());
            println!("  Collections Received: {}", summary.total_collections);
            println!("  Files Rendered: {}", summary.documents_rendered);
            println!("  Files Written: {}", summary.delivered_files.len());
            println!("  Empty Collections Skipped: {}", summary.collections_skipped);
            println!("  Records: {}", summary.total_records);
            println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
            if !summary.dry_run {
                println!("  Output Directory: {output_dir}");
            }
            println!();

            if !summary.errors.is_empty() {
                println!("⚠️  Errors encountered:");
                for error in &summary.errors {
                    println!("  - {}: {}", error.error_type, error.message);
                    if let Some(context) = &error.context {
                        println!("    Context: {context}");
                    }
                }
                println!();
            }
        }
        WorkflowOutcome::Failed(e) => {
            println!("❌ Export failed: {e}");
            println!();
        }
    }

    exit_code(report)
}

/// Map a workflow report to the process exit code
pub fn exit_code(report: &WorkflowReport) -> i32 {
    match &report.outcome {
        WorkflowOutcome::Succeeded(summary) if summary.is_successful() => 0,
        WorkflowOutcome::Succeeded(_) => 1,
        WorkflowOutcome::Failed(ExtractError::Source(_)) => 4,
        WorkflowOutcome::Failed(ExtractError::Configuration(_)) => 2,
        WorkflowOutcome::Failed(_) => 5,
    }
}
