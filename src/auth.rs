use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::handler::AppState;

/// Rejects any request whose `Authorization: Bearer <token>` header does not
/// carry the configured API token.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let authorized = matches!(token, Some(token) if token == &*state.api_token);

    if !authorized {
        tracing::error!(path = %request.uri().path(), "unauthorized request");
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
