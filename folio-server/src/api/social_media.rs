use axum::{extract::State, Json};

use folio_types::{CreateSocialMediaRequest, SocialMedia, UpdateSocialMediaRequest};

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::{ApiError, ApiResult};
use crate::db::repositories::SocialMediaRepository;
use crate::state::AppState;

/// GET /api/social-media - List social media links in display order
pub async fn list_social_media(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SocialMedia>>> {
    let repo = SocialMediaRepository::new(state.db.pool.clone());
    let links = repo
        .list()
        .map_err(|e| ApiError::internal("Failed to fetch social media", e))?;

    Ok(Json(links))
}

/// POST /api/social-media - Create a link at the end of the display sequence
pub async fn create_social_media(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSocialMediaRequest>,
) -> ApiResult<Json<SocialMedia>> {
    let new_link = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid social media data", e))?;

    let repo = SocialMediaRepository::new(state.db.pool.clone());
    let link = repo
        .create(&new_link)
        .map_err(|e| ApiError::internal("Failed to create social media", e))?;

    Ok(Json(link))
}

/// PUT /api/social-media/:id - Patch a link's editable fields
pub async fn update_social_media(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateSocialMediaRequest>,
) -> ApiResult<Json<SocialMedia>> {
    let patch = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid social media data", e))?;

    let repo = SocialMediaRepository::new(state.db.pool.clone());
    let link = repo
        .update(id, &patch)
        .map_err(|e| ApiError::internal("Failed to update social media", e))?
        .ok_or_else(|| ApiError::NotFound("Social media not found".to_string()))?;

    Ok(Json(link))
}

/// DELETE /api/social-media/:id - Remove a link; ranks close up on the next read
pub async fn delete_social_media(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let repo = SocialMediaRepository::new(state.db.pool.clone());
    let deleted = repo
        .delete(id)
        .map_err(|e| ApiError::internal("Failed to delete social media", e))?;

    if !deleted {
        return Err(ApiError::NotFound("Social media not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Social media deleted successfully"
    })))
}
