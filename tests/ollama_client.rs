//! Integration tests for the Ollama client against a mocked endpoint.
//!
//! The client is blocking, so each call runs on a blocking task while
//! the mock server lives on the test runtime.

use ai_commit::llm::ollama::OllamaClient;
use ai_commit::llm::prompts::DIFF_LIMIT;
use ai_commit::llm::{Generation, RemoteGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/generate", server.uri())
}

async fn generate(url: String, diff: String) -> Generation {
    tokio::task::spawn_blocking(move || {
        let client = OllamaClient::new(url, "mistral");
        client.generate(&diff)
    })
    .await
    .expect("client task panicked")
}

#[tokio::test]
async fn strips_quotes_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "mistral", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "mistral",
            "created_at": "2025-01-01T00:00:00Z",
            "response": "\"Fix bug\"",
            "done": true
        })))
        .mount(&server)
        .await;

    let result = generate(endpoint(&server), "diff --git a/a b/a\n+x".into()).await;
    assert_eq!(result, Generation::Message("Fix bug".to_string()));
}

#[tokio::test]
async fn strips_echoed_label_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Commit message: Add login"
        })))
        .mount(&server)
        .await;

    let result = generate(endpoint(&server), "diff".into()).await;
    assert_eq!(result, Generation::Message("Add login".to_string()));
}

#[tokio::test]
async fn server_error_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let result = generate(endpoint(&server), "diff".into()).await;
    match result {
        Generation::Degraded(reason) => {
            assert!(reason.contains("500"), "reason was {reason:?}");
            assert!(reason.contains("model not loaded"), "reason was {reason:?}");
        }
        Generation::Message(m) => panic!("expected degradation, got message {m:?}"),
    }
}

#[tokio::test]
async fn empty_response_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "  \"\"  "})))
        .mount(&server)
        .await;

    let result = generate(endpoint(&server), "diff".into()).await;
    assert!(matches!(result, Generation::Degraded(_)));
}

#[tokio::test]
async fn malformed_payload_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = generate(endpoint(&server), "diff".into()).await;
    assert!(matches!(result, Generation::Degraded(_)));
}

#[tokio::test]
async fn unreachable_service_degrades() {
    // Nothing listens on the server once it is dropped.
    let url = {
        let server = MockServer::start().await;
        endpoint(&server)
    };

    let result = generate(url, "diff".into()).await;
    assert!(matches!(result, Generation::Degraded(_)));
}

#[tokio::test]
async fn prompt_embeds_at_most_the_diff_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Trim diff"})))
        .mount(&server)
        .await;

    let long_diff = "x".repeat(3 * DIFF_LIMIT);
    let result = generate(endpoint(&server), long_diff).await;
    assert_eq!(result, Generation::Message("Trim diff".to_string()));

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("request body is JSON");
    let prompt = body["prompt"].as_str().expect("prompt field present");
    let embedded = prompt.chars().filter(|c| *c == 'x').count();
    assert_eq!(embedded, DIFF_LIMIT);
}
