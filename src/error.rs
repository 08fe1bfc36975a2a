use std::fmt;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::ErrorBody;

/// Reasons an inbound bookmark payload is refused. The `Display` text is sent
/// back to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' is required")]
    MissingField(&'static str),
    #[error("'{0}' must be a string")]
    NotText(&'static str),
    #[error("'url' must be a valid URL")]
    InvalidUrl,
    #[error("'rating' must be an integer between 1 and 5")]
    InvalidRating,
    #[error("Request body must contain either 'title', 'url', 'description' or 'rating'")]
    EmptyPatch,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(&'static str),
    Unauthorized,
    Internal(anyhow::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ApiError::*;
        match self {
            BadRequest(s) => write!(f, "BadRequest: {}", s),
            NotFound(s) => write!(f, "NotFound: {}", s),
            Unauthorized => write!(f, "Unauthorized"),
            Internal(e) => write!(f, "Internal: {:#}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ApiError::*;
        match self {
            Internal(e) => Some(&**e),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;
        let (status, message) = match self {
            BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized request".to_string()),
            Internal(e) => {
                tracing::error!("request failed on store error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!(error = %rejection.body_text(), "unreadable request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal(error)
    }
}
