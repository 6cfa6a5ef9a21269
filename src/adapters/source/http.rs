//! REST record source
//!
//! Talks to a backend exposing two endpoints:
//!
//! - `GET {base_url}/collections` returns a JSON array of collection names
//! - `POST {base_url}/records` with `{"objectNames": [...]}` returns a JSON
//!   array of `{"sourceName" | "sObjectType": ..., "records": [...]}`

use super::traits::RecordSource;
use crate::config::SourceConfig;
use crate::domain::{CollectionName, ExtractError, RecordCollection, Result, SourceError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// Body of the record fetch request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchRecordsRequest<'a> {
    object_names: &'a [CollectionName],
}

/// Record source backed by a REST API
///
/// # Example
///
/// ```no_run
/// use sample_extract::adapters::source::{HttpRecordSource, RecordSource};
/// use sample_extract::config::SourceConfig;
///
/// # async fn example() -> sample_extract::domain::Result<()> {
/// let source = HttpRecordSource::new(&SourceConfig::default())?;
/// let names = source.list_collection_names().await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpRecordSource {
    base_url: String,
    client: Client,
    bearer_token: Option<String>,
}

impl HttpRecordSource {
    /// Create a new HTTP record source from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `base_url` is missing or the HTTP
    /// client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ExtractError::Configuration("source.base_url is required".to_string())
            })?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for record source");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ExtractError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let bearer_token = config
            .access_token
            .as_ref()
            .map(|token| token.expose_secret().as_ref().to_string());

        Ok(Self {
            base_url,
            client,
            bearer_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success status into a typed error, keeping the body text
    async fn check_status(response: Response) -> std::result::Result<Response, SourceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            Err(SourceError::ServerError {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(SourceError::ClientError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn list_collection_names(&self) -> Result<Vec<CollectionName>> {
        let url = self.url("collections");
        tracing::debug!(url = %url, "Listing collection names");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(SourceError::from)?;
        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(SourceError::from)?;
        let names: Vec<String> = serde_json::from_str(&body).map_err(|e| {
            SourceError::ListFetchFailed(format!("expected a JSON array of names: {e}"))
        })?;

        let parsed = CollectionName::parse_list(&names);
        if parsed.len() != names.len() {
            tracing::warn!(
                skipped = names.len() - parsed.len(),
                "Ignoring blank collection names returned by backend"
            );
        }

        Ok(parsed)
    }

    async fn fetch_record_collections(
        &self,
        names: &[CollectionName],
    ) -> Result<Vec<RecordCollection>> {
        let url = self.url("records");
        tracing::debug!(url = %url, requested = names.len(), "Fetching record collections");

        let response = self
            .authorize(self.client.post(&url))
            .json(&FetchRecordsRequest {
                object_names: names,
            })
            .send()
            .await
            .map_err(SourceError::from)?;
        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(SourceError::from)?;
        let collections: Vec<RecordCollection> = serde_json::from_str(&body).map_err(|e| {
            SourceError::RecordFetchFailed(format!("unexpected response body: {e}"))
        })?;

        tracing::debug!(
            returned = collections.len(),
            records = collections.iter().map(RecordCollection::len).sum::<usize>(),
            "Record collections received"
        );

        Ok(collections)
    }

    fn describe(&self) -> String {
        format!("http({})", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn config(base_url: &str) -> SourceConfig {
        SourceConfig {
            base_url: Some(base_url.to_string()),
            ..SourceConfig::default()
        }
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let source = HttpRecordSource::new(&config("https://backend.example.com/api/")).unwrap();
        assert_eq!(source.url("records"), "https://backend.example.com/api/records");
        assert_eq!(source.describe(), "http(https://backend.example.com/api)");
    }

    #[test]
    fn test_new_requires_base_url() {
        let mut cfg = config("https://backend.example.com");
        cfg.base_url = None;
        assert!(matches!(
            HttpRecordSource::new(&cfg),
            Err(ExtractError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_keeps_token() {
        let mut cfg = config("https://backend.example.com");
        cfg.access_token = Some(secret_string("abc".to_string()));
        let source = HttpRecordSource::new(&cfg).unwrap();
        assert_eq!(source.bearer_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_fetch_request_body_shape() {
        let names = CollectionName::parse_list(["Account", "Contact"]);
        let body = serde_json::to_value(FetchRecordsRequest {
            object_names: &names,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"objectNames": ["Account", "Contact"]})
        );
    }
}
