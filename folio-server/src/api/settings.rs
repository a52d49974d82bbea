use axum::{extract::State, Json};

use folio_types::{SiteSettings, UpdateSettingsRequest};

use crate::api::extract::ApiJson;
use crate::api::{ApiError, ApiResult};
use crate::db::repositories::SettingsRepository;
use crate::state::AppState;

/// GET /api/settings - Get the site settings singleton
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<SiteSettings>> {
    let repo = SettingsRepository::new(state.db.pool.clone());
    let settings = repo
        .get()
        .map_err(|e| ApiError::internal("Failed to fetch settings", e))?;

    Ok(Json(settings))
}

/// PUT /api/settings - Replace the site settings wholesale
///
/// A full overwrite, not a merge: every required field must be present in
/// the payload. The singleton id stays 1.
pub async fn update_settings(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateSettingsRequest>,
) -> ApiResult<Json<SiteSettings>> {
    let new_settings = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid settings data", e))?;

    let repo = SettingsRepository::new(state.db.pool.clone());
    let settings = repo
        .replace(&new_settings)
        .map_err(|e| ApiError::internal("Failed to update settings", e))?;

    Ok(Json(settings))
}
