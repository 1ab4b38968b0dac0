use serde::Serialize;

use crate::script::WordTargets;

/// Successful `POST /api/generate` response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub output: String,
    pub meta: GenerateMeta,
}

/// Sizing details of a generated spot
#[derive(Debug, Serialize)]
pub struct GenerateMeta {
    pub duration: u32,
    pub words: usize,
    pub targets: WordTargets,
}

/// Successful `POST /api/normalize` response
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub ok: bool,
    pub output: String,
}

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
