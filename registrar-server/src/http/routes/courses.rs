//! Course pages
//!
//! A blank name on add or edit is not an error: the form is shown again
//! without a notice.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Form, Router,
};

use crate::db::{DbError, Session};
use crate::http::error::PageError;
use crate::http::extractors::RecordId;
use crate::http::outcome::Outcome;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{CourseForm, CourseName, Notice, NoticeParams};

const LIST_PATH: &str = "/courses";
const DUPLICATE_NAME: &str = "Course name already exists.";

/// GET /courses
async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NoticeParams>,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let courses = session.courses().list().await?;

    Ok(Outcome::page(views::course_list(
        &courses,
        params.into_notice().as_ref(),
    )))
}

/// GET /courses/add
async fn add_form() -> Outcome {
    Outcome::page(views::course_form("Add Course", "/courses/add", "", None))
}

/// POST /courses/add
async fn add_course(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CourseForm>,
) -> Result<Outcome, PageError> {
    let Ok(name) = CourseName::new(&form.name) else {
        return Ok(add_form().await);
    };

    let mut session = Session::begin(&state.pool).await?;
    match session.courses().create(&name).await {
        Ok(course) => {
            tracing::debug!(id = course.id, name = %course.name, "course added");
            Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::success("Course added successfully!")))
        }
        Err(DbError::Duplicate { .. }) => Ok(Outcome::page_with_status(
            StatusCode::CONFLICT,
            views::course_form(
                "Add Course",
                "/courses/add",
                &form.name,
                Some(&Notice::error(DUPLICATE_NAME)),
            ),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /courses/edit/{id}
async fn edit_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let course = session.courses().get(id).await?;

    Ok(Outcome::page(views::course_form(
        "Edit Course",
        &format!("/courses/edit/{}", id),
        &course.name,
        None,
    )))
}

/// POST /courses/edit/{id}
async fn edit_course(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Form(form): Form<CourseForm>,
) -> Result<Outcome, PageError> {
    let action = format!("/courses/edit/{}", id);
    let mut session = Session::begin(&state.pool).await?;
    let course = session.courses().get(id).await?;

    let Ok(name) = CourseName::new(&form.name) else {
        return Ok(Outcome::page(views::course_form(
            "Edit Course",
            &action,
            &course.name,
            None,
        )));
    };

    match session.courses().update(id, &name).await {
        Ok(()) => {
            tracing::debug!(id, "course updated");
            Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::success("Course updated successfully!")))
        }
        Err(DbError::Duplicate { .. }) => Ok(Outcome::page_with_status(
            StatusCode::CONFLICT,
            views::course_form(
                "Edit Course",
                &action,
                &form.name,
                Some(&Notice::error(DUPLICATE_NAME)),
            ),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /courses/delete/{id}
async fn delete_confirm(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let course = session.courses().get(id).await?;

    Ok(Outcome::page(views::course_delete(&course)))
}

/// POST /courses/delete/{id}
async fn delete_course(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    session.courses().delete(id).await?;
    tracing::debug!(id, "course deleted");

    Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::info("Course deleted successfully!")))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(list_courses))
        .route("/courses/add", get(add_form).post(add_course))
        .route("/courses/edit/{id}", get(edit_form).post(edit_course))
        .route("/courses/delete/{id}", get(delete_confirm).post(delete_course))
}
