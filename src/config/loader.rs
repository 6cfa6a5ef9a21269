//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ExtractConfig, HeaderSource, SourceKind};
use super::secret::secret_string;
use crate::domain::errors::ExtractError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "SAMPLE_EXTRACT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExtractConfig
/// 4. Applies environment variable overrides (SAMPLE_EXTRACT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use sample_extract::config::loader::load_config;
///
/// let config = load_config("sample-extract.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExtractConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExtractError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExtractError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExtractConfig = toml::from_str(&contents)
        .map_err(|e| ExtractError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExtractError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        path = %path.display(),
        source_kind = ?config.source.kind,
        header_source = %config.export.header_source,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExtractError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExtractError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Applies environment variable overrides using the SAMPLE_EXTRACT_* prefix
///
/// Environment variables follow the pattern: SAMPLE_EXTRACT_<SECTION>_<KEY>
/// For example: SAMPLE_EXTRACT_SOURCE_BASE_URL, SAMPLE_EXTRACT_EXPORT_OUTPUT_DIR
fn apply_env_overrides(config: &mut ExtractConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_var("APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Source overrides
    if let Some(val) = env_var("SOURCE_KIND") {
        config.source.kind = match val.to_lowercase().as_str() {
            "http" => SourceKind::Http,
            "file" => SourceKind::File,
            other => {
                return Err(ExtractError::Configuration(format!(
                    "Invalid {ENV_PREFIX}_SOURCE_KIND '{other}'. Must be one of: http, file"
                )))
            }
        };
    }
    if let Some(val) = env_var("SOURCE_BASE_URL") {
        config.source.base_url = Some(val);
    }
    if let Some(val) = env_var("SOURCE_ACCESS_TOKEN") {
        config.source.access_token = Some(secret_string(val));
    }
    if let Some(val) = env_var("SOURCE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.source.timeout_seconds = timeout;
        }
    }
    if let Some(val) = env_var("SOURCE_TLS_VERIFY") {
        config.source.tls_verify = val.parse().unwrap_or(true);
    }
    if let Some(val) = env_var("SOURCE_SNAPSHOT_PATH") {
        config.source.snapshot_path = Some(val);
    }

    // Selection overrides
    if let Some(val) = env_var("SELECTION_COLLECTIONS") {
        config.selection.collections = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Some(val) = env_var("SELECTION_PRUNE_STALE") {
        config.selection.prune_stale = val.parse().unwrap_or(false);
    }

    // Export overrides
    if let Some(val) = env_var("EXPORT_HEADER_SOURCE") {
        config.export.header_source =
            HeaderSource::from_str(&val).map_err(ExtractError::Configuration)?;
    }
    if let Some(val) = env_var("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Some(val) = env_var("EXPORT_MIME_TYPE") {
        config.export.mime_type = val;
    }

    // Logging overrides
    if let Some(val) = env_var("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SAMPLE_EXTRACT_LOADER_TEST_VAR", "test_value");
        let input = "access_token = \"${SAMPLE_EXTRACT_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "access_token = \"test_value\"\n");
        std::env::remove_var("SAMPLE_EXTRACT_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SAMPLE_EXTRACT_LOADER_MISSING_VAR");
        let input = "access_token = \"${SAMPLE_EXTRACT_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# token = \"${SAMPLE_EXTRACT_LOADER_NEVER_SET}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "# token = \"${SAMPLE_EXTRACT_LOADER_NEVER_SET}\"\n");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "info"

[source]
kind = "http"
base_url = "https://backend.example.com/api"

[selection]
collections = ["Account", "Contact"]

[export]
header_source = "union_of_all_records"
output_dir = "/tmp/exports"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.source.base_url.as_deref(),
            Some("https://backend.example.com/api")
        );
        assert_eq!(config.selection.collections, vec!["Account", "Contact"]);
        assert_eq!(config.export.header_source, HeaderSource::UnionOfAllRecords);
    }
}
