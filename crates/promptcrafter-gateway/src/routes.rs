//! HTTP surface: prompt generation, health, and the tone catalog.

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path},
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use promptcrafter_core::{
    all_tones, categories, category_for, generate, PromptInput, PromptOutput, ToneCategories,
    UNCATEGORIZED,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const HEALTH_MESSAGE: &str = "PromptCrafter API is running";

/// Body of `POST /api/prompts/generate`. Missing or null fields fall back to empty values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub selected_tones: Option<Vec<String>>,
    #[serde(default)]
    pub is_voice_input: Option<bool>,
}

impl From<GenerateRequest> for PromptInput {
    fn from(req: GenerateRequest) -> Self {
        PromptInput {
            text: req.input_text.unwrap_or_default(),
            selected_tones: req.selected_tones.unwrap_or_default(),
            is_voice_input: req.is_voice_input.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub output: PromptOutput,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ToneCategoryResponse {
    pub tone: String,
    pub category: &'static str,
}

pub fn build_app(cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/prompts/generate", post(generate_prompt))
        .route("/api/prompts/health", get(health))
        .route("/api/tones", get(list_tones))
        .route("/api/tones/categories", get(tone_categories))
        .route("/api/tones/:tone/category", get(tone_category))
        .layer(cors_layer(cors_allowed_origins))
        .layer(axum::middleware::from_fn(log_requests))
}

fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// POST /api/prompts/generate: run the core pipeline and time it.
async fn generate_prompt(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("rejected generate request: {}", rejection.body_text());
        (rejection.status(), rejection.body_text())
    })?;

    let input = PromptInput::from(body);
    let unknown: Vec<&str> = input
        .selected_tones
        .iter()
        .map(String::as_str)
        .filter(|t| category_for(t) == UNCATEGORIZED)
        .collect();
    if !unknown.is_empty() {
        tracing::debug!(?unknown, "tones outside the catalog passed through");
    }

    let started = Instant::now();
    let output = generate(&input);
    let processing_time_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        content_type = %output.content_type,
        tones_applied = output.tones_applied,
        voice = input.is_voice_input,
        processing_time_ms,
        "prompt generated"
    );

    Ok(Json(GenerateResponse {
        output,
        processing_time_ms,
    }))
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn list_tones() -> Json<Vec<&'static str>> {
    Json(all_tones())
}

async fn tone_categories() -> Json<&'static ToneCategories> {
    Json(categories())
}

async fn tone_category(Path(tone): Path<String>) -> Json<ToneCategoryResponse> {
    let category = category_for(&tone);
    Json(ToneCategoryResponse { tone, category })
}
