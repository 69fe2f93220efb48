//! Enrollment endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use enrollctl_core::Enrollment;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::models::Identifier;
use crate::state::AppState;

/// Enroll request
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub ci: String,
    #[serde(alias = "codigo")]
    pub code: String,
}

/// Enrollment confirmation
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub message: String,
    pub enrollment: Enrollment,
}

/// POST /enrollments - enroll a student in a course
async fn enroll(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<EnrollResponse>), ApiError> {
    let ci = Identifier::new("ci", &req.ci)?;
    let code = Identifier::new("code", &req.code)?;

    let enrollment = state.registry().await.enroll(ci.as_str(), code.as_str())?;
    tracing::info!(%enrollment, "student enrolled");

    Ok((
        StatusCode::CREATED,
        Json(EnrollResponse {
            message: format!("enrolled {}", enrollment),
            enrollment,
        }),
    ))
}

/// Enrollment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/enrollments", post(enroll))
}
