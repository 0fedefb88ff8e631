pub mod repository;
pub mod schema;

use async_trait::async_trait;
use tracing::{error, info};

use crate::models::{Course, NewCourse};

pub use repository::SqliteCourseStore;

/// Storage behind the HTTP handlers. Each method issues exactly one
/// parameterized statement.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Trivial liveness query.
    async fn ping(&self) -> Result<(), sqlx::Error>;
    async fn ensure_schema(&self) -> Result<(), sqlx::Error>;
    async fn list(&self) -> Result<Vec<Course>, sqlx::Error>;
    async fn insert(&self, course: &NewCourse) -> Result<(), sqlx::Error>;
    /// Returns the number of rows affected.
    async fn update(&self, id: i64, course: &NewCourse) -> Result<u64, sqlx::Error>;
    /// Returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;
}

/// Checks the database is reachable and creates the `course` table if absent.
///
/// Failures are logged and swallowed: the server still starts and individual
/// requests report their own storage errors.
pub async fn initialize(store: &dyn CourseStore) {
    if let Err(e) = store.ping().await {
        error!("Database connection failed: {}", e);
        return;
    }
    info!("Database connection successful");

    match store.ensure_schema().await {
        Ok(()) => info!("Course table created or already exists"),
        Err(e) => error!("Failed to create course table: {}", e),
    }
}
