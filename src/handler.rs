use std::sync::Arc;

use axum::response::IntoResponse;
use tracing::info;

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(db: Database, api_token: impl Into<Arc<str>>) -> Self {
        AppState {
            db: Arc::new(db),
            api_token: api_token.into(),
        }
    }
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    "Hello, world!"
}
