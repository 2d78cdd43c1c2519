//! Page error types with IntoResponse
//!
//! Only faults that end a request land here. Validation and duplicate-key
//! failures are answered by re-rendering the originating form instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::views;
use crate::db::DbError;

/// Request-ending error with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// Referenced record or page does not exist (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl PageError {
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { resource, id } if id.is_empty() => format!("{} not found.", resource),
            Self::NotFound { resource, id } => format!("No {} with id '{}'.", resource, id),
            Self::Database(_) => "An internal error occurred.".to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } => {
                (StatusCode::NOT_FOUND, views::not_found(&self.message())).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, show a generic page
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, views::server_error()).into_response()
            }
        }
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
