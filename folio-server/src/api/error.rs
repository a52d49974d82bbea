use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_types::{ErrorResponse, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

/// API failure taxonomy; every variant renders as a `{message}` JSON body
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalError(String),
}

impl ApiError {
    /// 400 carrying the endpoint's stable message; the offending fields only
    /// reach the debug log
    pub fn invalid_payload(message: &str, err: ValidationError) -> Self {
        tracing::debug!("{}: {}", message, err);
        ApiError::BadRequest(message.to_string())
    }

    /// 500 carrying the endpoint's stable message; the cause only reaches
    /// the error log
    pub fn internal(message: &str, err: anyhow::Error) -> Self {
        tracing::error!("{}: {:#}", message, err);
        ApiError::InternalError(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::internal("An unexpected error occurred", err)
    }
}
