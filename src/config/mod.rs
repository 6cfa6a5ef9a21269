//! Configuration management for sample-extract.
//!
//! TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SAMPLE_EXTRACT_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`SourceConfig`] - Record source (HTTP backend or JSON snapshot)
//! - [`SelectionConfig`] - Default selection and stale-name pruning
//! - [`ExportConfig`] - Header policy, output directory, MIME type
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! kind = "http"
//! base_url = "https://backend.example.com/api"
//! access_token = "${SAMPLE_EXTRACT_TOKEN}"
//!
//! [selection]
//! collections = ["Account", "Contact"]
//! prune_stale = false
//!
//! [export]
//! header_source = "first_record"
//! output_dir = "./exports"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use sample_extract::config::load_config;
//!
//! # fn example() {
//! match load_config("sample-extract.toml") {
//!     Ok(config) => println!("Writing to {}", config.export.output_dir),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, Environment, ExportConfig, ExtractConfig, HeaderSource, LoggingConfig,
    SelectionConfig, SourceConfig, SourceKind,
};
pub use secret::{secret_string, SecretString, SecretValue};
