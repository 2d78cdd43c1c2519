//! Enrollment form validation

use serde::Deserialize;

use super::validation::{parse_integer, require};
use super::ValidationError;

/// Raw enrollment form: the two selected identifiers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentForm {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub course_id: String,
}

/// Student/course identifier pair to enroll.
///
/// Neither identifier is checked against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentPair {
    pub student_id: i64,
    pub course_id: i64,
}

impl EnrollmentPair {
    pub fn from_form(form: &EnrollmentForm) -> Result<Self, ValidationError> {
        let student_id = require("student", &form.student_id)?;
        let course_id = require("course", &form.course_id)?;

        Ok(Self {
            student_id: parse_integer("student", &student_id)?,
            course_id: parse_integer("course", &course_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ids_required() {
        let form = EnrollmentForm {
            student_id: "3".into(),
            course_id: String::new(),
        };
        assert_eq!(
            EnrollmentPair::from_form(&form).unwrap_err(),
            ValidationError::Empty { field: "course" }
        );
    }

    #[test]
    fn parses_ids() {
        let form = EnrollmentForm {
            student_id: "3".into(),
            course_id: "7".into(),
        };
        assert_eq!(
            EnrollmentPair::from_form(&form).unwrap(),
            EnrollmentPair {
                student_id: 3,
                course_id: 7
            }
        );
    }
}
