use axum::{extract::State, Json};

use folio_types::{CreateFriendRequest, Friend, UpdateFriendRequest};

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::{ApiError, ApiResult};
use crate::db::repositories::FriendRepository;
use crate::state::AppState;

/// GET /api/friends - List friends in display order
pub async fn list_friends(State(state): State<AppState>) -> ApiResult<Json<Vec<Friend>>> {
    let repo = FriendRepository::new(state.db.pool.clone());
    let friends = repo
        .list()
        .map_err(|e| ApiError::internal("Failed to fetch friends", e))?;

    Ok(Json(friends))
}

/// POST /api/friends - Create a friend at the end of the display sequence
pub async fn create_friend(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateFriendRequest>,
) -> ApiResult<Json<Friend>> {
    let new_friend = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid friend data", e))?;

    let repo = FriendRepository::new(state.db.pool.clone());
    let friend = repo
        .create(&new_friend)
        .map_err(|e| ApiError::internal("Failed to create friend", e))?;

    Ok(Json(friend))
}

/// PUT /api/friends/:id - Patch a friend's editable fields
pub async fn update_friend(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateFriendRequest>,
) -> ApiResult<Json<Friend>> {
    let patch = payload
        .validate()
        .map_err(|e| ApiError::invalid_payload("Invalid friend data", e))?;

    let repo = FriendRepository::new(state.db.pool.clone());
    let friend = repo
        .update(id, &patch)
        .map_err(|e| ApiError::internal("Failed to update friend", e))?
        .ok_or_else(|| ApiError::NotFound("Friend not found".to_string()))?;

    Ok(Json(friend))
}

/// DELETE /api/friends/:id - Remove a friend; ranks close up on the next read
pub async fn delete_friend(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let repo = FriendRepository::new(state.db.pool.clone());
    let deleted = repo
        .delete(id)
        .map_err(|e| ApiError::internal("Failed to delete friend", e))?;

    if !deleted {
        return Err(ApiError::NotFound("Friend not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Friend deleted successfully"
    })))
}
