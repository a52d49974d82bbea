use axum::{extract::State, Json};

use folio_types::{LoginRequest, LoginResponse, PublicUser};

use crate::api::extract::ApiJson;
use crate::api::{ApiError, ApiResult};
use crate::auth::{self, AuthError};
use crate::db::repositories::UserRepository;
use crate::state::AppState;

/// POST /api/auth/login - Verify the admin credentials
///
/// Stateless: a successful login returns the public identity and nothing
/// else, no session or cookie. The dashboard keeps its own logged-in flag.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    // Absent and empty-string fields rank the same here, matching how the
    // dashboard submits untouched inputs
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password required".to_string(),
        ));
    }

    let users = UserRepository::new(state.db.pool.clone());
    let user = auth::authenticate(&users, &username, &password).map_err(|e| match e {
        AuthError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid credentials".to_string())
        }
        AuthError::Store(err) => ApiError::internal("Internal server error", err),
    })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: PublicUser::from(&user),
    }))
}
