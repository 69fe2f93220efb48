//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use enrollctl_core::{Course, Student};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidCi;
use crate::models::Identifier;
use crate::state::AppState;

/// Registered student response
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student: Student,
}

/// Courses of one student
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentCoursesResponse {
    pub courses: Vec<Course>,
}

/// POST /students - register a student
async fn register_student(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Student>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    Identifier::new("ci", &req.ci)?;
    let student = state.registry().await.register_student(req)?;
    tracing::info!(ci = %student.ci, "student registered");

    Ok((StatusCode::CREATED, Json(StudentResponse { student })))
}

/// GET /students/{ci}/courses - courses the student is enrolled in
async fn courses_for_student(
    State(state): State<Arc<AppState>>,
    ValidCi(ci): ValidCi,
) -> Result<Json<StudentCoursesResponse>, ApiError> {
    let courses = state.registry().await.courses_for_student(ci.as_str())?;
    tracing::debug!(ci = %ci.as_str(), count = courses.len(), "listed courses for student");

    Ok(Json(StudentCoursesResponse { courses }))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", post(register_student))
        .route("/students/{ci}/courses", get(courses_for_student))
}
