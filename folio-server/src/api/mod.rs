pub mod auth;
pub mod error;
pub mod extract;
pub mod friends;
pub mod projects;
pub mod settings;
pub mod social_media;

pub use error::{ApiError, ApiResult};

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Build the API router. The server binary layers CORS, tracing and static
/// serving on top; integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Authentication
        .route("/api/auth/login", post(auth::login))
        // Site settings
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings", put(settings::update_settings))
        // Friends
        .route("/api/friends", get(friends::list_friends))
        .route("/api/friends", post(friends::create_friend))
        .route("/api/friends/:id", put(friends::update_friend))
        .route("/api/friends/:id", delete(friends::delete_friend))
        // Projects
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects", post(projects::create_project))
        .route("/api/projects/:id", put(projects::update_project))
        .route("/api/projects/:id", delete(projects::delete_project))
        // Social media
        .route("/api/social-media", get(social_media::list_social_media))
        .route("/api/social-media", post(social_media::create_social_media))
        .route("/api/social-media/:id", put(social_media::update_social_media))
        .route("/api/social-media/:id", delete(social_media::delete_social_media))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
