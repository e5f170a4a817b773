//! Main chat endpoint.
//!
//! `POST /api/chat` is one stateless request/response exchange: the
//! message is routed through the rule engine and the exchange is
//! appended to the chat log.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::engine::{generate_response, AlertSource};
use crate::language::detect_language;
use crate::models::HealthAlert;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub detected_language: String,
    pub timestamp: String,
}

/// [`AlertSource`] backed by the request's database connection. Fetch
/// failures degrade to "no alerts" so the chat always answers.
struct DbAlertSource<'a> {
    conn: &'a Connection,
}

impl AlertSource for DbAlertSource<'_> {
    fn active_alerts(&self, limit: usize) -> Vec<HealthAlert> {
        db::list_active_alerts(self.conn, None, Some(limit)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Alert lookup failed, answering without alerts");
            Vec::new()
        })
    }
}

/// `POST /api/chat`
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message is required".into()));
    }

    let user_id = req.user_id.as_deref().unwrap_or("anonymous");
    let conn = ctx.open_db()?;

    let profile = db::get_profile(&conn, user_id)?;
    let detected_language = detect_language(&req.message);

    let alerts = DbAlertSource { conn: &conn };
    let response = generate_response(&req.message, profile.as_ref(), &alerts, &ctx.kb);

    db::insert_chat_record(&conn, user_id, &req.message, &response, detected_language)?;

    Ok(Json(ChatResponse {
        response,
        detected_language: detected_language.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
