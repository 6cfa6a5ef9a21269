//! Integration tests for the HTTP record source against a mock backend

use mockito::{Matcher, Server};
use sample_extract::adapters::source::{HttpRecordSource, RecordSource};
use sample_extract::config::{secret_string, SourceConfig};
use sample_extract::domain::{CollectionName, ExtractError, SourceError};
use serde_json::json;

fn source_for(server: &Server, token: Option<&str>) -> HttpRecordSource {
    let config = SourceConfig {
        base_url: Some(format!("{}/api", server.url())),
        access_token: token.map(|t| secret_string(t.to_string())),
        timeout_seconds: 5,
        ..SourceConfig::default()
    };
    HttpRecordSource::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_collection_names() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/collections")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["Account", "Contact", " "]"#)
        .create_async()
        .await;

    let names = source_for(&server, Some("secret-token"))
        .list_collection_names()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(names, CollectionName::parse_list(["Account", "Contact"]));
}

#[tokio::test]
async fn test_fetch_record_collections_sends_object_names() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/records")
        .match_body(Matcher::Json(json!({"objectNames": ["Account", "Case"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "sObjectType": "Account",
                    "records": [
                        {"Name": "Acme, Inc.", "Active": true},
                        {"Name": "Bob \"The\" Co", "Active": false}
                    ]
                },
                {"sourceName": "Case", "records": null}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let collections = source_for(&server, None)
        .fetch_record_collections(&CollectionName::parse_list(["Account", "Case"]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].source_name.as_str(), "Account");
    assert_eq!(collections[0].len(), 2);
    let fields: Vec<&str> = collections[0].records[0].keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["Name", "Active"]);
    assert!(collections[1].is_empty());
}

#[tokio::test]
async fn test_server_error_is_typed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/records")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = source_for(&server, None)
        .fetch_record_collections(&CollectionName::parse_list(["Account"]))
        .await
        .unwrap_err();

    match err {
        ExtractError::Source(SourceError::ServerError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_is_typed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/collections")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let err = source_for(&server, None)
        .list_collection_names()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExtractError::Source(SourceError::ClientError { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/records")
        .with_status(200)
        .with_body(r#"{"not": "an array"}"#)
        .create_async()
        .await;

    let err = source_for(&server, None)
        .fetch_record_collections(&[])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExtractError::Source(SourceError::RecordFetchFailed(_))
    ));
}
