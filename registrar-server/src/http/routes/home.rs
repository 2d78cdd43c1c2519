//! Landing page

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Datelike;

use crate::http::outcome::Outcome;
use crate::http::server::AppState;
use crate::http::views;

/// GET /
async fn index() -> Outcome {
    Outcome::page(views::home(chrono::Local::now().year()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
