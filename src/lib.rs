// Sample Extract - Record collection to CSV export tool
// Copyright (c) 2025 Sample Extract Contributors
// Licensed under the MIT License

//! # Sample Extract - record collections to CSV
//!
//! Sample Extract lets a user pick named record collections from a backend,
//! fetches their records and writes one CSV file per collection.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Listing** the collections a record source offers
//! - **Selecting** a set of collections and submitting one export request
//! - **Rendering** each collection as a fully quoted CSV document
//! - **Delivering** documents to a sink, one file per collection
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (selection, workflow, export)
//! - [`adapters`] - External integrations (record sources, sinks, notices)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sample_extract::adapters::sink::MemorySink;
//! use sample_extract::core::export::ExportEngine;
//! use sample_extract::domain::{CollectionName, RecordCollection};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let accounts = RecordCollection::from_values(
//!     CollectionName::new("Account")?,
//!     vec![
//!         json!({"Name": "Acme, Inc.", "Active": true}),
//!         json!({"Name": "Bob \"The\" Co", "Active": false}),
//!     ],
//! );
//!
//! let sink = MemorySink::new();
//! let summary = ExportEngine::default()
//!     .export_and_deliver(&[accounts], &sink)
//!     .await;
//!
//! assert_eq!(summary.delivered_files, vec!["Account.csv"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## CSV Format
//!
//! The header row is the field names joined with `,`. Every data cell is
//! wrapped in double quotes with embedded quotes doubled, including numbers
//! and booleans. Rows are separated by `\n` with no trailing newline. A field
//! missing from a record renders as `""`.
//!
//! ## Error Handling
//!
//! Sample Extract uses the [`domain::ExtractError`] type for all errors:
//!
//! ```rust,no_run
//! use sample_extract::domain::ExtractError;
//!
//! fn example() -> Result<(), ExtractError> {
//!     let config = sample_extract::config::load_config("sample-extract.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! A collection whose cells cannot be rendered fails on its own; the other
//! collections of the same request are still exported.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
