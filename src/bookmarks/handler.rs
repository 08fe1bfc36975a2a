//! HTTP handlers for the bookmarks resource

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::{
    BOOKMARK_NOT_FOUND, Bookmark, BookmarkPayload, BookmarkStore, ExistingBookmark,
    sanitize::sanitize_bookmark,
    validate::{validate_new, validate_patch},
};
use crate::error::{ApiError, ValidationError};
use crate::handler::AppState;

fn rejected(err: ValidationError) -> ApiError {
    tracing::error!("invalid bookmark payload: {}", err);
    err.into()
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let store = BookmarkStore::new(state.db.connection());
    let bookmarks = store.list_all().await?;

    tracing::info!("got {} bookmarks", bookmarks.len());
    Ok(Json(bookmarks.into_iter().map(sanitize_bookmark).collect()))
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<BookmarkPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let input = validate_new(&payload).map_err(rejected)?;

    let store = BookmarkStore::new(state.db.connection());
    let bookmark = store.insert(input).await?;
    tracing::info!("bookmark with id {} created", bookmark.id);

    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize_bookmark(bookmark)),
    )
        .into_response())
}

pub async fn get_bookmark(ExistingBookmark(bookmark): ExistingBookmark) -> Json<Bookmark> {
    Json(sanitize_bookmark(bookmark))
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    ExistingBookmark(bookmark): ExistingBookmark,
) -> Result<StatusCode, ApiError> {
    let store = BookmarkStore::new(state.db.connection());

    // Another request may have removed the row after the guard resolved it.
    if store.delete_by_id(bookmark.id).await? == 0 {
        return Err(ApiError::NotFound(BOOKMARK_NOT_FOUND));
    }

    tracing::info!("bookmark with id {} deleted", bookmark.id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    ExistingBookmark(bookmark): ExistingBookmark,
    payload: Result<Json<BookmarkPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    let patch = validate_patch(&payload).map_err(rejected)?;

    let store = BookmarkStore::new(state.db.connection());
    let updated = store.update(bookmark.id, patch).await?;
    tracing::info!(rows = updated, "bookmark with id {} updated", bookmark.id);

    Ok(StatusCode::NO_CONTENT)
}
