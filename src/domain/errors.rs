//! Domain error types
//!
//! This module defines the error hierarchy for sample-extract.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record source errors (listing names or fetching records)
    #[error("Record source error: {0}")]
    Source(#[from] SourceError),

    /// CSV rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Delivery sink errors
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Illegal export workflow transition
    #[error("Workflow error: {0}")]
    Workflow(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Record source errors
///
/// Errors that occur when talking to the backend that owns the record
/// collections. These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Listing the available collection names failed
    #[error("Failed to list collection names: {0}")]
    ListFetchFailed(String),

    /// Fetching record collections failed
    #[error("Failed to fetch record collections: {0}")]
    RecordFetchFailed(String),

    /// Failed to connect to the backend
    #[error("Failed to connect to record source: {0}")]
    ConnectionFailed(String),

    /// Backend answered with a body we could not interpret
    #[error("Invalid response from record source: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Errors raised while turning a record collection into CSV text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A cell value has no string form (null, array or object)
    #[error(
        "Cannot convert {kind} value to text in collection '{collection}', row {row}, field '{field}'"
    )]
    CellStringify {
        collection: String,
        field: String,
        row: usize,
        kind: &'static str,
    },

    /// The CSV writer itself failed
    #[error("CSV writer failed for collection '{collection}': {message}")]
    Writer { collection: String, message: String },
}

impl RenderError {
    /// Name of the collection the error belongs to
    pub fn collection(&self) -> &str {
        match self {
            RenderError::CellStringify { collection, .. } => collection,
            RenderError::Writer { collection, .. } => collection,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExtractError {
    fn from(err: toml::de::Error) -> Self {
        ExtractError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from reqwest errors, classified so callers never see reqwest types
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout(err.to_string())
        } else if err.is_decode() {
            SourceError::InvalidResponse(err.to_string())
        } else {
            SourceError::ConnectionFailed(err.to_string())
        }
    }
}
