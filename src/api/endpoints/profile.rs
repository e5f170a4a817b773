//! User profile endpoints.
//!
//! `GET /api/profile?user_id=` fetches. `POST /api/profile` upserts
//! with field-wise merge (absent fields keep stored values).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::models::{ProfileUpdate, UserProfile};

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub user_id: String,
}

/// `GET /api/profile`
pub async fn get(
    State(ctx): State<ApiContext>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<UserProfile>, ApiError> {
    let conn = ctx.open_db()?;
    db::get_profile(&conn, &query.user_id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))
}

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub update: ProfileUpdate,
}

/// `POST /api/profile`
pub async fn upsert(
    State(ctx): State<ApiContext>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    if req.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user_id is required".into()));
    }

    let conn = ctx.open_db()?;
    let profile = db::upsert_profile(&conn, &req.user_id, &req.update)?;
    Ok(Json(profile))
}
