//! Course repository
//!
//! Course names are unique; the constraint is the only check.

use sqlx::{FromRow, SqliteConnection};

use super::DbError;
use crate::models::CourseName;

/// Course record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Course repository
pub struct CourseRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> CourseRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// All courses, most recently added first.
    pub async fn list(&mut self) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id DESC")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(courses)
    }

    pub async fn get(&mut self, id: i64) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("course", id))
    }

    pub async fn create(&mut self, name: &CourseName) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>("INSERT INTO courses (name) VALUES (?) RETURNING id, name")
            .bind(name.as_str())
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| DbError::from_write(e, "course", "name"))
    }

    pub async fn update(&mut self, id: i64, name: &CourseName) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
            .bind(name.as_str())
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| DbError::from_write(e, "course", "name"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("course", id));
        }
        Ok(())
    }

    /// Remove a course. Enrollments pointing at it are left in place.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("course", id));
        }
        Ok(())
    }
}
