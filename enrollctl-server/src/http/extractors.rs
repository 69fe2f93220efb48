//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{Identifier, ValidationError};

async fn identifier_from_path<S>(
    parts: &mut Parts,
    state: &S,
    field: &'static str,
) -> Result<Identifier, ApiError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| ApiError::Validation(ValidationError::Empty { field }))?;

    Ok(Identifier::new(field, &raw)?)
}

/// Extract and validate a student `ci` from path
pub struct ValidCi(pub Identifier);

impl<S> FromRequestParts<S> for ValidCi
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        identifier_from_path(parts, state, "ci").await.map(Self)
    }
}

/// Extract and validate a course `code` from path
pub struct ValidCode(pub Identifier);

impl<S> FromRequestParts<S> for ValidCode
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        identifier_from_path(parts, state, "code").await.map(Self)
    }
}
