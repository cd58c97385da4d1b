use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use paydesk_types::api::ValidationErrors;

/// Failure modes a handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("username already taken")]
    UsernameTaken,

    #[error("{0}")]
    BadRequest(&'static str),

    /// One or more fields failed validation; nothing was persisted.
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// Store or task failure. Fatal for the request, never retried.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::UsernameTaken => StatusCode::CONFLICT.into_response(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::Internal(err) => {
                error!("internal error: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
