//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels
//! - Console output
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sample_extract::logging::init_logging;
//! use sample_extract::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a rendered collection
///
/// # Example
///
/// ```no_run
/// use sample_extract::log_collection_exported;
///
/// log_collection_exported!("Account", "Account.csv", 42);
/// ```
#[macro_export]
macro_rules! log_collection_exported {
    ($collection:expr, $file_name:expr, $records:expr) => {
        tracing::info!(
            collection = %$collection,
            file_name = %$file_name,
            records = $records,
            "Collection exported"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use sample_extract::log_error_with_context;
/// use sample_extract::domain::ExtractError;
///
/// let error = ExtractError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
