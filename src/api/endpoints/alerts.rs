//! Health alert endpoints.
//!
//! `GET /api/alerts` lists active alerts, newest first, with optional
//! location filter. `POST /api/alerts` creates an alert; critical severity
//! fires the SMS notification stub.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::models::enums::Severity;
use crate::models::{HealthAlert, NewAlert};
use crate::notify;

#[derive(Deserialize)]
pub struct AlertsQuery {
    pub location: Option<String>,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<HealthAlert>,
}

/// `GET /api/alerts`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<AlertsResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let alerts = db::list_active_alerts(&conn, query.location.as_deref(), None)?;
    Ok(Json(AlertsResponse { alerts }))
}

#[derive(Serialize)]
pub struct CreateAlertResponse {
    pub message: &'static str,
    pub id: i64,
}

/// `POST /api/alerts`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<NewAlert>,
) -> Result<Json<CreateAlertResponse>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Title is required".into()));
    }
    if req.description.trim().is_empty() {
        return Err(ApiError::BadRequest("Description is required".into()));
    }

    let conn = ctx.open_db()?;
    let alert = db::insert_alert(&conn, &req)?;

    if alert.severity == Severity::Critical {
        notify::send_sms_alerts(&alert);
    }

    tracing::info!(id = alert.id, severity = alert.severity.as_str(), "Alert created");

    Ok(Json(CreateAlertResponse {
        message: "Alert created successfully",
        id: alert.id,
    }))
}
