use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::{BOOKMARK_NOT_FOUND, Bookmark, BookmarkStore};
use crate::error::ApiError;
use crate::handler::AppState;

/// The bookmark named by the `:id` path segment, resolved before the
/// method-specific handler runs. Rejects with 404 when the segment is not an
/// id or no row matches.
#[derive(Debug, Clone)]
pub struct ExistingBookmark(pub Bookmark);

#[async_trait]
impl FromRequestParts<AppState> for ExistingBookmark {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(BOOKMARK_NOT_FOUND))?;

        let Ok(id) = raw_id.parse::<i64>() else {
            tracing::error!("bookmark with id {} not found", raw_id);
            return Err(ApiError::NotFound(BOOKMARK_NOT_FOUND));
        };

        let store = BookmarkStore::new(state.db.connection());
        match store.get_by_id(id).await? {
            Some(bookmark) => Ok(ExistingBookmark(bookmark)),
            None => {
                tracing::error!("bookmark with id {} not found", id);
                Err(ApiError::NotFound(BOOKMARK_NOT_FOUND))
            }
        }
    }
}
