//! Inbound payload checks. The first failing rule wins: presence of every
//! required field, then field types, then URL shape, then rating bounds.

use serde_json::Value as JsonValue;
use url::Url;

use super::model::{BookmarkPatch, BookmarkPayload, NewBookmark};
use crate::error::ValidationError;

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

pub fn validate_new(payload: &BookmarkPayload) -> Result<NewBookmark, ValidationError> {
    let raw_title = required(&payload.title, "title")?;
    let raw_url = required(&payload.url, "url")?;
    let raw_rating = required(&payload.rating, "rating")?;

    let title = title(raw_title)?;
    let url = text(raw_url, "url")?;
    let description = payload
        .description
        .as_ref()
        .map(|v| text(v, "description"))
        .transpose()?;

    check_url(&url)?;
    let rating = check_rating(raw_rating)?;

    Ok(NewBookmark {
        title,
        url,
        description,
        rating,
    })
}

/// Fields absent from `payload` stay `None` and are left untouched by the
/// update; present ones go through the same checks as on create.
pub fn validate_patch(payload: &BookmarkPayload) -> Result<BookmarkPatch, ValidationError> {
    if payload.is_empty() {
        return Err(ValidationError::EmptyPatch);
    }

    let title = payload.title.as_ref().map(title).transpose()?;
    let url = payload.url.as_ref().map(|v| text(v, "url")).transpose()?;
    let description = payload
        .description
        .as_ref()
        .map(|v| text(v, "description"))
        .transpose()?;

    if let Some(url) = &url {
        check_url(url)?;
    }
    let rating = payload.rating.as_ref().map(check_rating).transpose()?;

    Ok(BookmarkPatch {
        title,
        url,
        description,
        rating,
    })
}

fn required<'a>(
    value: &'a Option<JsonValue>,
    field: &'static str,
) -> Result<&'a JsonValue, ValidationError> {
    value.as_ref().ok_or(ValidationError::MissingField(field))
}

fn text(value: &JsonValue, field: &'static str) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::NotText(field))
}

fn title(value: &JsonValue) -> Result<String, ValidationError> {
    let title = text(value, "title")?;
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    Ok(title)
}

/// Absolute `http`/`https` URL with a host, no surrounding whitespace.
fn check_url(raw: &str) -> Result<(), ValidationError> {
    if raw.trim() != raw {
        return Err(ValidationError::InvalidUrl);
    }
    let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    match parsed.scheme() {
        "http" | "https" if has_host => Ok(()),
        _ => Err(ValidationError::InvalidUrl),
    }
}

/// Any integral JSON number in range, so `5.0` counts as 5.
fn check_rating(value: &JsonValue) -> Result<i64, ValidationError> {
    let rating = match value.as_i64() {
        Some(r) => Some(r),
        None => value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64),
    };

    rating
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(ValidationError::InvalidRating)
}
