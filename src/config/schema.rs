//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where record collections are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// REST backend reached over HTTP(S)
    #[default]
    Http,
    /// JSON snapshot file on disk
    File,
}

/// How the CSV header of a collection is derived
///
/// `FirstRecord` keeps the field names of the first record only, which is the
/// established output shape; later records are mapped onto that header.
/// `UnionOfAllRecords` collects every field seen in the collection, in
/// first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeaderSource {
    /// Field names of `records[0]`
    #[default]
    FirstRecord,
    /// Every field name seen in any record
    UnionOfAllRecords,
}

impl std::fmt::Display for HeaderSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderSource::FirstRecord => write!(f, "first_record"),
            HeaderSource::UnionOfAllRecords => write!(f, "union_of_all_records"),
        }
    }
}

impl std::str::FromStr for HeaderSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_record" => Ok(HeaderSource::FirstRecord),
            "union_of_all_records" | "union" => Ok(HeaderSource::UnionOfAllRecords),
            other => Err(format!(
                "Invalid header_source '{other}'. Must be one of: first_record, union_of_all_records"
            )),
        }
    }
}

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Record source configuration
    pub source: SourceConfig,

    /// Selection settings
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExtractConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate(&self.environment)?;
        self.selection.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (render documents but don't deliver them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Record source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source implementation
    #[serde(default)]
    pub kind: SourceKind,

    /// Base URL of the REST backend (required when kind = "http")
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token sent to the REST backend (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: disabling verification is refused in production.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Path of the JSON snapshot file (required when kind = "file")
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

impl SourceConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        use secrecy::ExposeSecret;

        match self.kind {
            SourceKind::Http => {
                let base_url = match self.base_url.as_deref() {
                    Some(url) if !url.trim().is_empty() => url,
                    _ => {
                        return Err(
                            "source.base_url is required when source.kind = 'http'".to_string()
                        )
                    }
                };

                let parsed = url::Url::parse(base_url)
                    .map_err(|e| format!("source.base_url is not a valid URL: {e}"))?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err("source.base_url must start with http:// or https://".to_string());
                }

                if let Some(token) = &self.access_token {
                    if token.expose_secret().is_empty() {
                        return Err("source.access_token cannot be empty when set".to_string());
                    }
                }

                if self.timeout_seconds == 0 {
                    return Err("source.timeout_seconds must be > 0".to_string());
                }

                if *environment == Environment::Production && !self.tls_verify {
                    return Err(
                        "TLS certificate verification cannot be disabled in production environments. \
                        Set 'tls_verify = true' or use 'environment = \"development\"' for local testing."
                            .to_string(),
                    );
                }
            }
            SourceKind::File => {
                if self
                    .snapshot_path
                    .as_deref()
                    .map(|p| p.trim().is_empty())
                    .unwrap_or(true)
                {
                    return Err(
                        "source.snapshot_path is required when source.kind = 'file'".to_string()
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Http,
            base_url: Some("http://localhost:8080/api".to_string()),
            access_token: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
            snapshot_path: None,
        }
    }
}

/// Selection configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    /// Collections selected when none are given on the command line
    #[serde(default)]
    pub collections: Vec<String>,

    /// Drop selected names that disappear from the available list
    #[serde(default)]
    pub prune_stale: bool,
}

impl SelectionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.collections.iter().any(|c| c.trim().is_empty()) {
            return Err("selection.collections cannot contain empty names".to_string());
        }
        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Header derivation policy
    #[serde(default)]
    pub header_source: HeaderSource,

    /// Directory CSV files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// MIME type handed to the delivery sink
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if !self.mime_type.contains('/') {
            return Err(format!(
                "export.mime_type '{}' is not a valid MIME type",
                self.mime_type
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            header_source: HeaderSource::default(),
            output_dir: default_output_dir(),
            mime_type: default_mime_type(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_output_dir() -> String {
    "./exports".to_string()
}

fn default_mime_type() -> String {
    "text/plain".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
