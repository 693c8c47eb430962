use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateSuccess {
    pub success: bool,
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateFailure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TranslateFailure {
    fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

pub fn build_prompt(word: &str) -> String {
    format!(
        "Provide a detailed definition, part of speech (词性), Chinese translation (中文翻译), \
         and a concise example sentence (例句) for the English word: \"{word}\". \
         Format the response clearly using Markdown (like **bold** and *italics*), \
         do not use any preamble or introduction."
    )
}

/// Translate endpoint. Dispatches on method itself so the 405 envelope is
/// returned for every non-POST method, not just the ones axum knows about.
pub async fn translate(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    // One 405 covers both wrong method and missing credential, matching the
    // deployed contract.
    let llm = match &state.llm {
        Some(llm) if method == Method::POST => llm.clone(),
        _ => {
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(TranslateFailure::new(
                    "Method Not Allowed or API Key Missing in Environment.",
                )),
            )
                .into_response();
        }
    };

    let word = serde_json::from_slice::<TranslateRequest>(&body)
        .ok()
        .and_then(|request| request.word)
        .filter(|word| !word.is_empty());

    let Some(word) = word else {
        return (
            StatusCode::BAD_REQUEST,
            Json(TranslateFailure::new(
                "Missing \"word\" parameter in request body.",
            )),
        )
            .into_response();
    };

    let prompt = build_prompt(&word);

    match llm.generate(&prompt).await {
        Ok(translation) => (
            StatusCode::OK,
            Json(TranslateSuccess {
                success: true,
                translation,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Gemini proxy error: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TranslateFailure::with_details(
                    "Internal Server Error during AI call.",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "llm_configured": state.llm.is_some()
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(TranslateFailure::new("Not Found.")),
    )
        .into_response()
}
