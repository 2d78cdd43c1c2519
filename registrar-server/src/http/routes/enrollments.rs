//! Enrollment pages: joined list and add form

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Form, Router,
};

use crate::db::Session;
use crate::http::error::PageError;
use crate::http::outcome::Outcome;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{EnrollmentForm, EnrollmentPair, Notice, NoticeParams};

const LIST_PATH: &str = "/enrollments";

/// GET /enrollments
async fn list_enrollments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NoticeParams>,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let rows = session.enrollments().list().await?;

    Ok(Outcome::page(views::enrollment_list(
        &rows,
        params.into_notice().as_ref(),
    )))
}

/// GET /enrollments/add
async fn add_form(State(state): State<Arc<AppState>>) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let candidates = session.enrollments().candidates().await?;

    Ok(Outcome::page(views::enrollment_form(
        &candidates,
        &EnrollmentForm::default(),
    )))
}

/// POST /enrollments/add
///
/// A missing selection shows the form again, candidates included, with no
/// notice.
async fn add_enrollment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EnrollmentForm>,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;

    let Ok(pair) = EnrollmentPair::from_form(&form) else {
        let candidates = session.enrollments().candidates().await?;
        return Ok(Outcome::page(views::enrollment_form(&candidates, &form)));
    };

    let enrollment = session.enrollments().create(pair).await?;
    tracing::debug!(
        id = enrollment.id,
        student_id = enrollment.student_id,
        course_id = enrollment.course_id,
        "enrollment added"
    );

    Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::success("Enrollment added successfully!")))
}

/// Enrollment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(list_enrollments))
        .route("/enrollments/add", get(add_form).post(add_enrollment))
}
