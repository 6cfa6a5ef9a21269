//! List command implementation
//!
//! This module implements the `list` command for displaying the collections
//! the record source offers.

use crate::adapters::source::create_record_source;
use crate::config::load_config;
use crate::domain::CollectionName;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show names containing this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing available collections");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let source = match create_record_source(&config.source) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to initialize record source");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let names = match source.list_collection_names().await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(error = %e, source = %source.describe(), "Failed to list collections");
                println!("❌ Failed to list collections from {}", source.describe());
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let shown = self.apply_filter(&names);
        if shown.is_empty() {
            println!("No collections found.");
            return Ok(0);
        }

        println!("📋 {} collection(s) available:", shown.len());
        println!();
        for name in shown {
            let marker = if config
                .selection
                .collections
                .iter()
                .any(|c| c.trim() == name.as_str())
            {
                "*"
            } else {
                " "
            };
            println!("  {marker} {name}");
        }
        println!();

        Ok(0)
    }

    fn apply_filter<'a>(&self, names: &'a [CollectionName]) -> Vec<&'a CollectionName> {
        match &self.filter {
            Some(filter) => {
                let needle = filter.to_lowercase();
                names
                    .iter()
                    .filter(|n| n.as_str().to_lowercase().contains(&needle))
                    .collect()
            }
            None => names.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<CollectionName> {
        CollectionName::parse_list(["Account", "Contact", "AccountHistory"])
    }

    #[test]
    fn test_list_args_defaults() {
        let args = ListArgs::default();
        assert!(args.filter.is_none());
        assert_eq!(args.apply_filter(&names()).len(), 3);
    }

    #[test]
    fn test_list_filter_is_case_insensitive() {
        let args = ListArgs {
            filter: Some("account".to_string()),
        };
        let all = names();
        let shown: Vec<&str> = args.apply_filter(&all).iter().map(|n| n.as_str()).collect();

        assert_eq!(shown, vec!["Account", "AccountHistory"]);
    }
}
