//! Repository implementations for database access
//!
//! Each repository borrows the connection of a `Session` and follows these
//! patterns:
//! - One statement per operation
//! - Uniqueness enforced by the table constraint (no check-then-insert)
//! - Update/delete report NotFound when zero rows are affected

pub mod students;
pub mod courses;
pub mod enrollments;

pub use students::{Student, StudentRepo};
pub use courses::{Course, CourseRepo};
pub use enrollments::{Candidates, Enrollment, EnrollmentRepo, EnrollmentRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate {field} for {resource}")]
    Duplicate {
        resource: &'static str,
        field: &'static str,
    },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify a failed write, turning unique-constraint violations into
    /// `Duplicate`.
    pub(crate) fn from_write(
        err: sqlx::Error,
        resource: &'static str,
        field: &'static str,
    ) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Duplicate { resource, field };
            }
        }
        Self::Sqlx(err)
    }
}

/// Escape LIKE wildcards so user input matches literally (with `ESCAPE '\'`).
pub(crate) fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
