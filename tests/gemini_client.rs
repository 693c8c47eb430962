use axum::http::HeaderMap;
use axum::{http::StatusCode, routing::any, Json, Router};
use serde_json::{json, Value};

use lexidef_backend::llm::{GeminiClient, GenerativeClient};

async fn spawn_mock_gemini(reply: Value, status: StatusCode) -> String {
    let app = Router::new().route(
        "/v1beta/models/*rest",
        any(move |headers: HeaderMap| async move {
            assert_eq!(headers["x-goog-api-key"], "test-key");
            (status, Json(reply))
        }),
    );

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn client_for(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        "test-key".to_string(),
        base_url.to_string(),
        "gemini-2.5-flash".to_string(),
    )
}

#[tokio::test]
async fn generate_extracts_candidate_text() {
    let reply = json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "a feeling of "}, {"text": "well-being"}]
            }
        }]
    });
    let base_url = spawn_mock_gemini(reply, StatusCode::OK).await;

    let text = client_for(&base_url).generate("define joy").await.unwrap();

    assert_eq!(text, "a feeling of well-being");
}

#[tokio::test]
async fn generate_fails_on_upstream_error_status() {
    let reply = json!({"error": {"message": "quota exhausted"}});
    let base_url = spawn_mock_gemini(reply, StatusCode::TOO_MANY_REQUESTS).await;

    let err = client_for(&base_url)
        .generate("define joy")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn generate_fails_when_reply_has_no_text() {
    let reply = json!({"candidates": []});
    let base_url = spawn_mock_gemini(reply, StatusCode::OK).await;

    let err = client_for(&base_url)
        .generate("define joy")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no candidate text"));
}

#[tokio::test]
async fn generate_fails_when_upstream_is_unreachable() {
    let err = client_for("http://127.0.0.1:1")
        .generate("define joy")
        .await
        .unwrap_err();

    assert!(!err.to_string().is_empty());
}
