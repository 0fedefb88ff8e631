use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{CourseStore, schema};
use crate::models::{Course, NewCourse};

#[derive(Clone)]
pub struct SqliteCourseStore {
    db: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(schema::CREATE_COURSE_TABLE)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>("SELECT * FROM course")
            .fetch_all(&self.db)
            .await
    }

    async fn insert(&self, course: &NewCourse) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO course (srno, name, description, isActive)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(course.srno)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.is_active)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn update(&self, id: i64, course: &NewCourse) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE course
            SET srno = ?, name = ?, description = ?, isActive = ?
            WHERE id = ?
            "#,
        )
        .bind(course.srno)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.is_active)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
