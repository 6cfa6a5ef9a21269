//! Domain models and types for sample-extract.
//!
//! The domain layer provides:
//! - **Identifiers** ([`CollectionName`])
//! - **Models** ([`Record`], [`RecordCollection`], [`CsvDocument`])
//! - **Error types** ([`ExtractError`], [`SourceError`], [`RenderError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use sample_extract::domain::{CollectionName, RecordCollection};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = CollectionName::new("Account")?;
//! let collection = RecordCollection::from_values(
//!     name,
//!     vec![json!({"Name": "Acme, Inc.", "Active": true})],
//! );
//! assert_eq!(collection.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

pub use document::CsvDocument;
pub use errors::{ExtractError, RenderError, SourceError};
pub use ids::CollectionName;
pub use record::{value_to_text, Record, RecordCollection};
pub use result::Result;
