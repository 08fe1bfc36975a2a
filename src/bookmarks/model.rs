use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

/// Raw request body for both create and update. Fields stay untyped so that
/// wrong types surface as validation failures instead of decode errors; a
/// JSON `null` reads the same as an absent key. Unknown keys, `id` included,
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkPayload {
    #[serde(default)]
    pub title: Option<JsonValue>,
    #[serde(default)]
    pub url: Option<JsonValue>,
    #[serde(default)]
    pub description: Option<JsonValue>,
    #[serde(default)]
    pub rating: Option<JsonValue>,
}

impl BookmarkPayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }
}

/// A fully validated bookmark ready to insert. Only built by
/// [`validate_new`](super::validate::validate_new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) description: Option<String>,
    pub(crate) rating: i64,
}

/// Validated partial update with at least one field set. Only built by
/// [`validate_patch`](super::validate::validate_patch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) rating: Option<i64>,
}
