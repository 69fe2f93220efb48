//! Course endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use enrollctl_core::{Course, Student};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidCode;
use crate::models::Identifier;
use crate::state::AppState;

/// Registered course response
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseResponse {
    pub course: Course,
}

/// Students of one course
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseStudentsResponse {
    pub students: Vec<Student>,
}

/// POST /courses - register a course
async fn register_course(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Course>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    Identifier::new("code", &req.code)?;
    let course = state.registry().await.register_course(req)?;
    tracing::info!(code = %course.code, "course registered");

    Ok((StatusCode::CREATED, Json(CourseResponse { course })))
}

/// GET /courses/{code}/students - students enrolled in the course
async fn students_for_course(
    State(state): State<Arc<AppState>>,
    ValidCode(code): ValidCode,
) -> Result<Json<CourseStudentsResponse>, ApiError> {
    let students = state.registry().await.students_for_course(code.as_str())?;
    tracing::debug!(code = %code.as_str(), count = students.len(), "listed students for course");

    Ok(Json(CourseStudentsResponse { students }))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", post(register_course))
        .route("/courses/{code}/students", get(students_for_course))
}
