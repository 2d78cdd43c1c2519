//! Enrollment repository
//!
//! Enrollments are insert-only. The list view inner-joins students and
//! courses, so enrollments whose student or course is gone drop out of it.

use sqlx::{FromRow, SqliteConnection};

use super::{Course, DbError, Student};
use crate::models::EnrollmentPair;

/// Enrollment record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

/// Enrollment joined with its student and course for list display
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EnrollmentRow {
    pub id: i64,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

/// Selectable students and courses for the enrollment form
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

/// Enrollment repository
pub struct EnrollmentRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Joined enrollment rows, most recent first.
    pub async fn list(&mut self) -> Result<Vec<EnrollmentRow>, DbError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT e.id, s.student_number, s.first_name, s.last_name, c.name AS course_name
            FROM enrollments e
            JOIN students s ON e.student_id = s.id
            JOIN courses c ON e.course_id = c.id
            ORDER BY e.id DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }

    /// Insert an enrollment as given.
    ///
    /// No existence check on either identifier and no duplicate check: the
    /// same pair may be enrolled more than once.
    pub async fn create(&mut self, pair: EnrollmentPair) -> Result<Enrollment, DbError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES (?, ?)
            RETURNING id, student_id, course_id
            "#,
        )
        .bind(pair.student_id)
        .bind(pair.course_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(enrollment)
    }

    /// Every student and course, unfiltered.
    pub async fn candidates(&mut self) -> Result<Candidates, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, student_number, first_name, last_name, course, year
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        let courses = sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(Candidates { students, courses })
    }
}
