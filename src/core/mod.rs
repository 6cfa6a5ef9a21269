//! Core business logic for Sample Extract.
//!
//! # Modules
//!
//! - [`selection`] - Option list and multi-selection, submit entry point
//! - [`workflow`] - Export request state machine and user notices
//! - [`export`] - CSV rendering, delivery and summary reporting
//!
//! # Export Workflow
//!
//! 1. **Refresh**: Load the selectable collection names from the record source
//! 2. **Select**: Replace the selection with the user's choice
//! 3. **Confirm**: Acknowledge the selection to the user
//! 4. **Fetch**: Request the selected collections from the record source
//! 5. **Render**: Build one CSV document per non-empty collection
//! 6. **Deliver**: Hand each document to the delivery sink
//! 7. **Report**: Notify success or failure, then "Process Ended"
//!
//! # Example
//!
//! ```rust,no_run
//! use sample_extract::adapters::notify::ConsoleNotifier;
//! use sample_extract::adapters::sink::FileSystemSink;
//! use sample_extract::adapters::source::create_record_source;
//! use sample_extract::config::load_config;
//! use sample_extract::core::export::ExportEngine;
//! use sample_extract::core::selection::SelectionCoordinator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sample-extract.toml")?;
//!
//! let mut coordinator = SelectionCoordinator::new(
//!     create_record_source(&config.source)?,
//!     Arc::new(FileSystemSink::new(&config.export.output_dir)),
//!     Arc::new(ConsoleNotifier::new()),
//!     ExportEngine::from_config(&config),
//! );
//!
//! coordinator.refresh_available().await;
//! let available = coordinator.available().to_vec();
//! coordinator.update_selection(available);
//!
//! let report = coordinator.submit().await;
//! println!("Ended in state {}", report.final_state());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod selection;
pub mod workflow;
