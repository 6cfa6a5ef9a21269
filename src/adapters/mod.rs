//! External system integrations for Sample Extract.
//!
//! - [`source`] - Record sources (HTTP backend, JSON snapshot file)
//! - [`sink`] - Delivery sinks for rendered CSV documents
//! - [`notify`] - User-facing notices
//!
//! # Design Pattern
//!
//! Adapters isolate external systems behind traits so the core can be driven
//! by in-memory implementations in tests. Record sources are picked from
//! configuration by a factory:
//!
//! ```rust,no_run
//! use sample_extract::adapters::source::create_record_source;
//! use sample_extract::config::{SourceConfig, SourceKind};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SourceConfig {
//!     kind: SourceKind::File,
//!     snapshot_path: Some("./snapshot.json".to_string()),
//!     ..Default::default()
//! };
//!
//! let source = create_record_source(&config)?;
//! let names = source.list_collection_names().await?;
//! # Ok(())
//! # }
//! ```

pub mod notify;
pub mod sink;
pub mod source;
