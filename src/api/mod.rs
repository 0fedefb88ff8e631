use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::{AppError, INVALID_COURSE_ID, MISSING_COURSE_ID};
use crate::extractors::Json;
use crate::models::{Course, CoursePayload, NewCourse};
use crate::state::AppState;

pub const GREETING: &str = "Welcome to the Course API";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/course", post(create_course))
        .route("/course/{id}", put(update_course).delete(delete_course))
        .route("/courses", get(list_courses))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    GREETING
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CoursePayload>,
) -> Result<(StatusCode, &'static str), AppError> {
    let course = NewCourse::try_from(req)?;

    state
        .store
        .insert(&course)
        .await
        .map_err(AppError::storage("Error inserting course"))?;

    Ok((StatusCode::CREATED, "Course inserted successfully"))
}

async fn list_courses(State(state): State<AppState>) -> Result<axum::Json<Vec<Course>>, AppError> {
    let courses = state
        .store
        .list()
        .await
        .map_err(AppError::storage("Error fetching courses"))?;

    if courses.is_empty() {
        return Err(AppError::EmptyResult);
    }
    Ok(axum::Json(courses))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, AppError> {
    let id = parse_course_id(&id)?;

    let affected = state
        .store
        .delete(id)
        .await
        .map_err(AppError::storage("Error deleting course"))?;

    if affected == 0 {
        return Err(AppError::NotFound);
    }
    debug!("deleted course {}", id);
    Ok("Course deleted successfully")
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CoursePayload>,
) -> Result<&'static str, AppError> {
    let id = parse_course_id(&id)?;
    let course = NewCourse::try_from(req)?;

    let affected = state
        .store
        .update(id, &course)
        .await
        .map_err(AppError::storage("Error updating course"))?;

    if affected == 0 {
        return Err(AppError::NotFound);
    }
    debug!("updated course {}", id);
    Ok("Course updated successfully")
}

fn parse_course_id(raw: &str) -> Result<i64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation(MISSING_COURSE_ID));
    }
    raw.parse()
        .map_err(|_| AppError::validation(INVALID_COURSE_ID))
}
