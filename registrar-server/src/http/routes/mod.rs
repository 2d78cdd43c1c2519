//! Route handlers organized by resource

pub mod health;
pub mod home;
pub mod students;
pub mod courses;
pub mod enrollments;

use axum::http::Uri;

use super::error::PageError;

/// Any path not in the route table
pub async fn fallback(uri: Uri) -> PageError {
    tracing::debug!(path = %uri.path(), "no route");
    PageError::NotFound {
        resource: "Page",
        id: String::new(),
    }
}
