//! Student pages: list, add, edit, delete, search

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::db::{DbError, Session};
use crate::http::error::PageError;
use crate::http::extractors::RecordId;
use crate::http::outcome::Outcome;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{Notice, NoticeParams, StudentFields, StudentForm};

const LIST_PATH: &str = "/view";
const DUPLICATE_NUMBER: &str = "Student number already exists.";

/// Search form (`query` only)
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// Re-render a student form with the submitted values and an error notice.
fn rejected(title: &str, action: &str, form: &StudentForm, status: StatusCode, message: String) -> Outcome {
    Outcome::page_with_status(
        status,
        views::student_form(title, action, form, Some(&Notice::error(message))),
    )
}

/// GET /view
async fn list_students(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NoticeParams>,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let students = session.students().list().await?;

    Ok(Outcome::page(views::student_list(
        &students,
        params.into_notice().as_ref(),
    )))
}

/// GET /add
async fn add_form() -> Outcome {
    Outcome::page(views::student_form(
        "Add Student",
        "/add",
        &StudentForm::default(),
        None,
    ))
}

/// POST /add
async fn add_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StudentForm>,
) -> Result<Outcome, PageError> {
    let fields = match StudentFields::from_form(&form) {
        Ok(fields) => fields,
        Err(e) => {
            return Ok(rejected(
                "Add Student",
                "/add",
                &form,
                StatusCode::UNPROCESSABLE_ENTITY,
                e.to_string(),
            ))
        }
    };

    let mut session = Session::begin(&state.pool).await?;
    match session.students().create(&fields).await {
        Ok(student) => {
            tracing::debug!(id = student.id, student_number = %student.student_number, "student added");
            Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::success("Student added successfully!")))
        }
        Err(DbError::Duplicate { .. }) => Ok(rejected(
            "Add Student",
            "/add",
            &form,
            StatusCode::CONFLICT,
            DUPLICATE_NUMBER.to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /edit/{id}
async fn edit_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let student = session.students().get(id).await?;

    Ok(Outcome::page(views::student_form(
        "Edit Student",
        &format!("/edit/{}", id),
        &StudentForm::from(&student),
        None,
    )))
}

/// POST /edit/{id}
async fn edit_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Form(form): Form<StudentForm>,
) -> Result<Outcome, PageError> {
    let action = format!("/edit/{}", id);
    let mut session = Session::begin(&state.pool).await?;
    session.students().get(id).await?;

    let fields = match StudentFields::from_form(&form) {
        Ok(fields) => fields,
        Err(e) => {
            return Ok(rejected(
                "Edit Student",
                &action,
                &form,
                StatusCode::UNPROCESSABLE_ENTITY,
                e.to_string(),
            ))
        }
    };

    // A concurrent delete between get() and update() surfaces as NotFound.
    match session.students().update(id, &fields).await {
        Ok(()) => {
            tracing::debug!(id, "student updated");
            Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::success("Student updated successfully!")))
        }
        Err(DbError::Duplicate { .. }) => Ok(rejected(
            "Edit Student",
            &action,
            &form,
            StatusCode::CONFLICT,
            DUPLICATE_NUMBER.to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /delete/{id}
async fn delete_confirm(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    let student = session.students().get(id).await?;

    Ok(Outcome::page(views::student_delete(&student)))
}

/// POST /delete/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Outcome, PageError> {
    let mut session = Session::begin(&state.pool).await?;
    session.students().delete(id).await?;
    tracing::debug!(id, "student deleted");

    Ok(Outcome::redirect(LIST_PATH).with_notice(Notice::info("Student deleted successfully!")))
}

/// GET /search - empty form, no search performed
async fn search_form() -> Outcome {
    Outcome::page(views::student_search("", &[], None))
}

/// POST /search
async fn search_students(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Outcome, PageError> {
    let query = form.query.trim();

    let mut session = Session::begin(&state.pool).await?;
    let students = session.students().search(query).await?;

    let notice = students
        .is_empty()
        .then(|| Notice::info("No matching students found."));

    Ok(Outcome::page(views::student_search(
        query,
        &students,
        notice.as_ref(),
    )))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(list_students))
        .route("/add", get(add_form).post(add_student))
        .route("/edit/{id}", get(edit_form).post(edit_student))
        .route("/delete/{id}", get(delete_confirm).post(delete_student))
        .route("/search", get(search_form).post(search_students))
}
