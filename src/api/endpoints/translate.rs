//! Translation stub endpoint.
//!
//! `POST /api/translate` echoes the input. No translation service is
//! integrated; the route exists so clients can keep a stable contract.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

fn default_target_lang() -> String {
    crate::config::DEFAULT_LANGUAGE.to_string()
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub original: String,
    pub translated: String,
    pub target_language: String,
    pub note: &'static str,
}

/// `POST /api/translate`
pub async fn translate(
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    Ok(Json(TranslateResponse {
        original: req.text.clone(),
        translated: req.text,
        target_language: req.target_lang,
        note: "Translation service not configured; returning original text",
    }))
}
