//! Per-request store handle
//!
//! A `Session` holds one pooled connection for the length of a request.
//! There is no enclosing transaction: every repository call is a single
//! statement that commits on its own. Dropping the session hands the
//! connection back to the pool.

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use super::repos::{CourseRepo, DbError, EnrollmentRepo, StudentRepo};

/// Scoped store handle for a single request
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    /// Acquire a connection from the pool.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self {
            conn: pool.acquire().await?,
        })
    }

    pub fn students(&mut self) -> StudentRepo<'_> {
        StudentRepo::new(&mut *self.conn)
    }

    pub fn courses(&mut self) -> CourseRepo<'_> {
        CourseRepo::new(&mut *self.conn)
    }

    pub fn enrollments(&mut self) -> EnrollmentRepo<'_> {
        EnrollmentRepo::new(&mut *self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, create_pool, schema, StudentRepo};
    use crate::models::{CourseName, StudentFields};

    fn ada() -> StudentFields {
        StudentFields {
            student_number: "S-1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            course: "Math".into(),
            year: 1843,
        }
    }

    #[tokio::test]
    async fn writes_persist_without_commit() {
        let pool = create_memory_pool().await.unwrap();
        schema::init(&pool).await.unwrap();

        {
            let mut session = Session::begin(&pool).await.unwrap();
            session
                .courses()
                .create(&CourseName::new("Astronomy").unwrap())
                .await
                .unwrap();
        }

        let mut session = Session::begin(&pool).await.unwrap();
        assert_eq!(session.courses().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn interleaved_edits_both_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("students.db").display());
        let pool = create_pool(&url).await.unwrap();
        schema::init(&pool).await.unwrap();

        let id = {
            let mut session = Session::begin(&pool).await.unwrap();
            session.students().create(&ada()).await.unwrap().id
        };

        let mut a = Session::begin(&pool).await.unwrap();
        let mut b = Session::begin(&pool).await.unwrap();

        a.students().get(id).await.unwrap();
        b.students().get(id).await.unwrap();

        let mut from_a = ada();
        from_a.first_name = "Augusta".into();
        a.students().update(id, &from_a).await.unwrap();

        let mut from_b = ada();
        from_b.last_name = "King".into();
        b.students().update(id, &from_b).await.unwrap();

        drop((a, b));

        let mut conn = pool.acquire().await.unwrap();
        let stored = StudentRepo::new(&mut *conn).get(id).await.unwrap();
        assert_eq!(stored.first_name, "Ada");
        assert_eq!(stored.last_name, "King");
    }

    #[tokio::test]
    async fn delete_racing_an_edit_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("students.db").display());
        let pool = create_pool(&url).await.unwrap();
        schema::init(&pool).await.unwrap();

        let mut editor = Session::begin(&pool).await.unwrap();
        let mut remover = Session::begin(&pool).await.unwrap();

        let id = editor.students().create(&ada()).await.unwrap().id;
        editor.students().get(id).await.unwrap();
        remover.students().delete(id).await.unwrap();

        let err = editor.students().update(id, &ada()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", .. }));
    }
}
