//! Student form validation
//!
//! All five fields are required. `year` must also parse as an integer.

use serde::Deserialize;

use super::validation::{parse_integer, require};
use super::ValidationError;
use crate::db::Student;

/// Raw student form as submitted by the browser.
///
/// Missing fields deserialize as empty strings so that validation, not the
/// extractor, decides what the user sees.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub year: String,
}

impl From<&Student> for StudentForm {
    fn from(s: &Student) -> Self {
        Self {
            student_number: s.student_number.clone(),
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            course: s.course.clone(),
            year: s.year.to_string(),
        }
    }
}

/// Validated student fields, ready to insert or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub year: i64,
}

impl StudentFields {
    /// Validate a submitted form.
    ///
    /// # Rules
    /// - Every field is non-empty after trimming whitespace
    /// - `year` parses as an integer (checked only once nothing is missing)
    ///
    /// # Example
    /// ```
    /// use registrar_server::models::{StudentFields, StudentForm};
    ///
    /// let form = StudentForm {
    ///     student_number: "S-001".into(),
    ///     first_name: "Ada".into(),
    ///     last_name: "Lovelace".into(),
    ///     course: "Mathematics".into(),
    ///     year: " 2024 ".into(),
    /// };
    /// assert_eq!(StudentFields::from_form(&form).unwrap().year, 2024);
    /// ```
    pub fn from_form(form: &StudentForm) -> Result<Self, ValidationError> {
        let student_number = require("student number", &form.student_number)?;
        let first_name = require("first name", &form.first_name)?;
        let last_name = require("last name", &form.last_name)?;
        let course = require("course", &form.course)?;
        let year = require("year", &form.year)?;
        let year = parse_integer("year", &year)?;

        Ok(Self {
            student_number,
            first_name,
            last_name,
            course,
            year,
        })
    }
}
