//! Student repository
//!
//! Handles student CRUD and search:
//! - create/update: unique student_number enforced by the table
//! - list/search: newest first

use sqlx::{FromRow, SqliteConnection};

use super::{escape_like, DbError};
use crate::models::StudentFields;

/// Student record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub year: i64,
}

/// Student repository
pub struct StudentRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> StudentRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// All students, most recently added first.
    pub async fn list(&mut self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, student_number, first_name, last_name, course, year
            FROM students
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(students)
    }

    /// Get a single student by ID.
    pub async fn get(&mut self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, student_number, first_name, last_name, course, year
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("student", id))
    }

    /// Insert a student.
    ///
    /// A taken student number fails with `Duplicate` and inserts nothing.
    pub async fn create(&mut self, fields: &StudentFields) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (student_number, first_name, last_name, course, year)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, student_number, first_name, last_name, course, year
            "#,
        )
        .bind(&fields.student_number)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.course)
        .bind(fields.year)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| DbError::from_write(e, "student", "student number"))
    }

    /// Overwrite every field of an existing student.
    pub async fn update(&mut self, id: i64, fields: &StudentFields) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET student_number = ?, first_name = ?, last_name = ?, course = ?, year = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.student_number)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.course)
        .bind(fields.year)
        .bind(id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| DbError::from_write(e, "student", "student number"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("student", id));
        }
        Ok(())
    }

    /// Remove a student. Enrollments pointing at it are left in place.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("student", id));
        }
        Ok(())
    }

    /// Substring search over number, names, and course.
    ///
    /// SQLite `LIKE` ignores case for ASCII letters only; other characters
    /// must match exactly. The empty query matches every student.
    pub async fn search(&mut self, query: &str) -> Result<Vec<Student>, DbError> {
        let pattern = format!("%{}%", escape_like(query.trim()));

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, student_number, first_name, last_name, course, year
            FROM students
            WHERE student_number LIKE ? ESCAPE '\'
               OR first_name LIKE ? ESCAPE '\'
               OR last_name LIKE ? ESCAPE '\'
               OR course LIKE ? ESCAPE '\'
            ORDER BY id DESC
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, schema, Session};
    use sqlx::SqlitePool;

    async fn setup() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        schema::init(&pool).await.unwrap();
        pool
    }

    fn fields(number: &str, first: &str, last: &str, course: &str) -> StudentFields {
        StudentFields {
            student_number: number.into(),
            first_name: first.into(),
            last_name: last.into(),
            course: course.into(),
            year: 2024,
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();

        let created = session
            .students()
            .create(&fields("S-1", "Ada", "Lovelace", "Math"))
            .await
            .unwrap();
        let all = session.students().list().await.unwrap();

        assert_eq!(all, vec![created.clone()]);
        assert_eq!(created.student_number, "S-1");
        assert_eq!(created.year, 2024);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.create(&fields("S-2", "Alan", "Turing", "CS")).await.unwrap();

        let numbers: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.student_number)
            .collect();
        assert_eq!(numbers, vec!["S-2", "S-1"]);
    }

    #[tokio::test]
    async fn duplicate_number_inserts_nothing() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        let err = repo
            .create(&fields("S-1", "Someone", "Else", "Art"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Duplicate { resource: "student", .. }));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        let existing = repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        let err = repo
            .update(existing.id + 100, &fields("S-9", "X", "Y", "Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn update_conflict_leaves_row_untouched() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        let second = repo.create(&fields("S-2", "Alan", "Turing", "CS")).await.unwrap();

        let err = repo
            .update(second.id, &fields("S-1", "Alan", "Turing", "CS"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Duplicate { .. }));
        assert_eq!(repo.get(second.id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        let s = repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.update(s.id, &fields("S-1", "Augusta", "King", "Poetry"))
            .await
            .unwrap();

        let updated = repo.get(s.id).await.unwrap();
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.course, "Poetry");
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        let s = repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.delete(s.id).await.unwrap();

        let err = repo.delete(s.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", .. }));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_columns() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.create(&fields("S-2", "Alan", "Turing", "Computer Science")).await.unwrap();
        repo.create(&fields("X-3", "Grace", "Hopper", "computing")).await.unwrap();

        assert_eq!(repo.search("LOVE").await.unwrap().len(), 1);
        assert_eq!(repo.search("comput").await.unwrap().len(), 2);
        assert_eq!(repo.search("s-").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_search_matches_everything() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.create(&fields("S-2", "Alan", "Turing", "CS")).await.unwrap();

        assert_eq!(repo.search("").await.unwrap().len(), 2);
        assert_eq!(repo.search("   ").await.unwrap().len(), 2);
        assert!(repo.search("zzz-no-match").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_wildcards_are_literal() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        repo.create(&fields("S-1", "Ada", "Lovelace", "Math")).await.unwrap();
        repo.create(&fields("S_2", "Alan", "Turing", "100% CS")).await.unwrap();

        assert_eq!(repo.search("%").await.unwrap().len(), 1);
        assert_eq!(repo.search("_").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_finds_non_ascii_names_by_exact_text() {
        let pool = setup().await;
        let mut session = Session::begin(&pool).await.unwrap();
        let mut repo = session.students();

        let emile = repo.create(&fields("S-1", "Émile", "Zola", "Lettres")).await.unwrap();
        repo.create(&fields("S-2", "Ada", "Lovelace", "Math")).await.unwrap();

        assert_eq!(repo.search("Émile").await.unwrap(), vec![emile.clone()]);
        assert_eq!(repo.search("mile").await.unwrap(), vec![emile.clone()]);
        assert_eq!(repo.search("ZOLA").await.unwrap(), vec![emile]);
    }
}
