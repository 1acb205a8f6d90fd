//! HTTP API integration tests.
//!
//! These tests start the server on an ephemeral port and talk to it over TCP.

use std::net::SocketAddr;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use docanalyst::server::routes::WELCOME_MESSAGE;
use docanalyst::server::{Server, ServerConfig};

/// A server running in the background for the duration of a test.
struct TestServer {
    addr: SocketAddr,
    client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = Server::with_default_analyzers(ServerConfig::new().with_bind_address(addr));

        let handle = tokio::spawn(async move {
            let _ = server.run_with_listener(listener).await;
        });

        Ok(Self {
            addr,
            client: Client::new(),
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn analyze(&self, text: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url("/analyze"))
            .json(&json!({ "text": text }))
            .send()
            .await?)
    }
}

#[tokio::test]
async fn test_root_returns_welcome_message() -> Result<()> {
    let server = TestServer::start().await?;

    let resp = server.client.get(server.url("/")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    assert_eq!(body["message"], WELCOME_MESSAGE);

    Ok(())
}

#[tokio::test]
async fn test_analyze_extracts_organization_and_person() -> Result<()> {
    let server = TestServer::start().await?;

    let resp = server.analyze("Apple Inc. was founded by Steve Jobs.").await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    let entities = body["entities"].as_array().unwrap();

    assert!(entities
        .iter()
        .any(|e| (e["text"] == "Apple Inc." || e["text"] == "Apple") && e["label"] == "ORGANIZATION"));
    assert!(entities
        .iter()
        .any(|e| e["text"] == "Steve Jobs" && e["label"] == "PERSON"));

    Ok(())
}

#[tokio::test]
async fn test_analyze_long_positive_document() -> Result<()> {
    let server = TestServer::start().await?;

    let text = "This is wonderful, amazing work and I love it. \
                The team delivered an excellent product that exceeded every expectation we had. \
                Customers are delighted with the results and the feedback has been fantastic. \
                Everyone involved should be proud of such a brilliant achievement this year.";

    let resp = server.analyze(text).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    assert_eq!(body.as_object().unwrap().len(), 3);
    assert_eq!(body["sentiment"]["label"], "POSITIVE");
    assert!(body["sentiment"]["score"].as_f64().unwrap() > 0.5);

    let summary = body["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(summary.len() <= text.len());

    Ok(())
}

#[tokio::test]
async fn test_analyze_is_idempotent() -> Result<()> {
    let server = TestServer::start().await?;
    let text = "Tim Cook leads Apple Inc. from California. The results were great.";

    let first: Value = server.analyze(text).await?.json().await?;
    let second: Value = server.analyze(text).await?.json().await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_empty_text_gets_error_response() -> Result<()> {
    let server = TestServer::start().await?;

    let resp = server.analyze("").await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = resp.json().await?;
    assert_eq!(body["code"], "invalid_input");
    assert!(body.get("summary").is_none());

    Ok(())
}

#[tokio::test]
async fn test_non_latin_documents_are_analyzed() -> Result<()> {
    let server = TestServer::start().await?;

    for text in ["Привет мир, это отличный документ.", "東京は素晴らしい都市です。"] {
        let resp = server.analyze(text).await?;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = resp.json().await?;
        assert_eq!(body["summary"], text);
    }

    let resp = server.analyze("!!! ???").await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await?;
    assert_eq!(body["code"], "invalid_input");

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let resp = server
        .client
        .post(server.url("/analyze"))
        .header("content-type", "application/json")
        .body("{\"text\": ")
        .send()
        .await?;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> Result<()> {
    let server = TestServer::start().await?;

    let resp = server.client.get(server.url("/openapi.json")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    assert!(body["paths"].get("/analyze").is_some());

    Ok(())
}
