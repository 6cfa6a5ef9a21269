//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sample-extract.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Sample Extract configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set source.base_url, or switch to kind = \"file\"");
                println!("  3. Put SAMPLE_EXTRACT_SOURCE_ACCESS_TOKEN in a .env file if needed");
                println!("  4. Validate configuration: sample-extract validate-config");
                println!("  5. List collections: sample-extract list");
                println!("  6. Run export: sample-extract export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Sample Extract Configuration File

[application]
log_level = "info"
dry_run = false

[source]
kind = "http"
base_url = "http://localhost:8080/api"
timeout_seconds = 60
tls_verify = true

[selection]
collections = []
prune_stale = false

[export]
header_source = "first_record"
output_dir = "./exports"
mime_type = "text/plain"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Sample Extract Configuration File
#
# Values can reference environment variables with ${VAR_NAME}.
# Every key can also be overridden with SAMPLE_EXTRACT_<SECTION>_<KEY>,
# e.g. SAMPLE_EXTRACT_EXPORT_OUTPUT_DIR=/tmp/csv

# development, staging or production
environment = "development"

[application]
# trace, debug, info, warn, error
log_level = "info"
# Render CSV files without writing them
dry_run = false

[source]
# "http" talks to the backend, "file" reads a JSON snapshot
kind = "http"
# GET {base_url}/collections lists names
# POST {base_url}/records fetches records
base_url = "https://backend.example.com/api"
# Bearer token, best kept in .env:
# access_token = "${SAMPLE_EXTRACT_TOKEN}"
timeout_seconds = 60
# Must stay true in production
tls_verify = true
# Used when kind = "file": a JSON array of
# {"sourceName": "...", "records": [...]}
# snapshot_path = "./snapshot.json"

[selection]
# Collections to export; empty means every available collection
collections = ["Account", "Contact"]
# Drop selected names the backend no longer offers
prune_stale = false

[export]
# "first_record": header from the first record's fields
# "union_of_all_records": every field seen in the collection
header_source = "first_record"
output_dir = "./exports"
mime_type = "text/plain"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#
        .to_string()
    }
}
