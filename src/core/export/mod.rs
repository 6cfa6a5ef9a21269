//! CSV export
//!
//! This module provides the export logic, including:
//! - Header derivation and CSV rendering
//! - Per-collection rendering and delivery
//! - Summary and reporting

pub mod render;
pub mod engine;
pub mod summary;

pub use render::{derive_header, render_csv};
pub use engine::{CollectionOutcome, ExportEngine};
pub use summary::{ExportError, ExportErrorType, ExportSummary};
