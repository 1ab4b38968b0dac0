use axum::{
    body::Bytes,
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::error::{RadioError, Result};
use crate::logging::{access_log_middleware, request_id_middleware, AccessLogSettings};
use crate::models::{
    GenerateMeta, GenerateRequest, GenerateResponse, HealthResponse, NormalizeRequest,
    NormalizeResponse,
};
use crate::script::{self, Brief, SpotDuration};
use crate::text_processing::normalize;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub max_request_bytes: usize,
    pub request_timeout: Duration,
    pub slow_request_threshold: Duration,
}

impl AppState {
    pub fn new(config: &ServerConfig, slow_request_threshold: Duration) -> Self {
        Self {
            max_request_bytes: config.max_request_bytes,
            request_timeout: config.request_timeout,
            slow_request_threshold,
        }
    }
}

fn check_body_size(body: &Bytes, limit: usize) -> Result<()> {
    if body.len() > limit {
        return Err(RadioError::PayloadTooLarge {
            size: body.len(),
            limit,
        });
    }
    Ok(())
}

// HTTP Handlers

/// Assemble a spot from the brief and return its radio read
///
/// A body that is not valid JSON is read as an empty brief, which still
/// produces a complete placeholder spot.
async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Json<GenerateResponse>> {
    check_body_size(&body, state.max_request_bytes)?;

    let req: GenerateRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!("Unparsable generate body, using empty brief: {}", e);
        GenerateRequest::default()
    });

    let duration = SpotDuration::pick(&req.duration_candidates());
    let brief = Brief::from_request(&req);

    let draft = script::assemble(duration, &brief);
    let output = normalize(&draft);
    let words = script::word_count(&output);

    tracing::debug!(
        duration = duration.seconds(),
        words = words,
        "Generated radio spot"
    );

    Ok(Json(GenerateResponse {
        ok: true,
        output,
        meta: GenerateMeta {
            duration: duration.seconds(),
            words,
            targets: duration.word_targets(),
        },
    }))
}

/// Normalize caller-supplied copy
async fn normalize_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NormalizeResponse>> {
    check_body_size(&body, state.max_request_bytes)?;

    let req: NormalizeRequest = serde_json::from_slice(&body)?;

    tracing::debug!("Normalize request - text_len={}", req.text.len());

    Ok(Json(NormalizeResponse {
        ok: true,
        output: normalize(&req.text),
    }))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let access_log = AccessLogSettings {
        slow_request_threshold: state.slow_request_threshold,
    };
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/normalize", post(normalize_text))
        .route("/health", get(health_check))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn_with_state(access_log, access_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
        .layer(cors)
}
