//! Tests for the assist boundary: every failure mode must degrade to the
//! fixed fallback values instead of surfacing an error.

use std::time::Duration;

use eduswap_core::domains::assist::service::{DESCRIPTION_FALLBACK, DESCRIPTION_EMPTY};
use eduswap_core::domains::assist::AssistService;
use gemini_client::GeminiClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MODEL: &str = "gemini-3-flash-preview";

fn service_at(base_url: String, timeout: Duration) -> AssistService {
    let client = GeminiClient::new("test-key").with_base_url(base_url);
    AssistService::new(client, MODEL, timeout)
}

/// Serve one canned HTTP response per connection on an ephemeral port.
async fn spawn_canned_server(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 16384];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A server that accepts connections but never answers.
async fn spawn_stalled_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 16384];
                let _ = stream.read(&mut buf).await;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Gemini envelope with a single text part.
fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_for_description() {
    // Nothing listens on this port
    let service = service_at("http://127.0.0.1:1".to_string(), Duration::from_secs(2));

    let outcome = service
        .generate_description("Arduino Uno", "Like New", "USB cable")
        .await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.value(), DESCRIPTION_FALLBACK);
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_for_price() {
    let service = service_at("http://127.0.0.1:1".to_string(), Duration::from_secs(2));

    let outcome = service.suggest_price("Arduino Uno", "Like New").await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.value().suggested_price, 10.0);
    assert_eq!(outcome.value().reasoning, "Default pricing due to error.");
}

#[tokio::test]
async fn malformed_model_json_falls_back_for_price() {
    // Valid envelope, but the model "replied" with prose instead of JSON
    let base_url = spawn_canned_server(envelope("a tenner should do it")).await;
    let service = service_at(base_url, Duration::from_secs(2));

    let outcome = service.suggest_price("Arduino Uno", "Like New").await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.value().suggested_price, 10.0);
}

#[tokio::test]
async fn schema_violating_reply_falls_back_for_price() {
    let base_url =
        spawn_canned_server(envelope(r#"{"suggested_price": "cheap", "reasoning": 5}"#)).await;
    let service = service_at(base_url, Duration::from_secs(2));

    let outcome = service.suggest_price("Arduino Uno", "Like New").await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.value().reasoning, "Default pricing due to error.");
}

#[tokio::test]
async fn well_formed_reply_is_generated_for_price() {
    let base_url = spawn_canned_server(envelope(
        r#"{"suggested_price": 42.5, "reasoning": "fair market rate"}"#,
    ))
    .await;
    let service = service_at(base_url, Duration::from_secs(2));

    let outcome = service.suggest_price("Arduino Uno", "Like New").await;

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.value().suggested_price, 42.5);
    assert_eq!(outcome.value().reasoning, "fair market rate");
}

#[tokio::test]
async fn generated_description_is_trimmed() {
    let base_url = spawn_canned_server(envelope("  A neat little board.  ")).await;
    let service = service_at(base_url, Duration::from_secs(2));

    let outcome = service
        .generate_description("Arduino Uno", "Like New", "USB cable")
        .await;

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.value(), "A neat little board.");
}

#[tokio::test]
async fn empty_completion_yields_placeholder_text() {
    let base_url = spawn_canned_server(envelope("   ")).await;
    let service = service_at(base_url, Duration::from_secs(2));

    let outcome = service
        .generate_description("Arduino Uno", "Like New", "USB cable")
        .await;

    // Not a transport failure, so not a fallback - just nothing usable
    assert!(!outcome.is_fallback());
    assert_eq!(outcome.value(), DESCRIPTION_EMPTY);
}

#[tokio::test]
async fn stalled_endpoint_times_out_into_fallback() {
    let base_url = spawn_stalled_server().await;
    let service = service_at(base_url, Duration::from_millis(200));

    let outcome = service
        .generate_description("Arduino Uno", "Like New", "USB cable")
        .await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.value(), DESCRIPTION_FALLBACK);
}
