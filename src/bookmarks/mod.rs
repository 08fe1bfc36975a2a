//! Bookmarks Module
//!
//! CRUD over a single `bookmarks` table, exposed as a small REST resource.
//!
//! # Request flow
//!
//! - Inbound JSON lands in [`BookmarkPayload`], where every field is an untyped
//!   optional value.
//! - [`validate`] turns it into a [`NewBookmark`] (create) or a non-empty
//!   [`BookmarkPatch`] (partial update), or a [`ValidationError`](crate::error::ValidationError).
//! - [`BookmarkStore`] runs the SQL against a borrowed libsql connection.
//! - [`sanitize`] escapes markup in every record before it leaves the service.
//!   Stored values are never rewritten.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks_api::bookmarks;
//!
//! let app = Router::new()
//!     .merge(bookmarks::routes())
//!     .with_state(app_state);
//!
//! let store = bookmarks::BookmarkStore::new(db.connection());
//! let all = store.list_all().await?;
//! ```

mod guard;
mod handler;
mod model;
mod routes;
pub mod sanitize;
mod store;
pub mod validate;

pub use guard::ExistingBookmark;
pub use model::*;
pub use routes::routes;
pub use store::BookmarkStore;

/// Message of the 404 returned for any id that does not resolve to a row.
pub const BOOKMARK_NOT_FOUND: &str = "Bookmark does not exist";

/// Schema scripts for the bookmarks table, applied once each at start-up.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
