//! Extractors - Estrattori che producono gli errori 400 prima di toccare lo store

use crate::core::{AppError, AuthError};
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

/// JSON body that is both well-formed and valid.
///
/// Every body rejection (syntax, missing field, content type) is reported as
/// `MalformedRequest` instead of axum's default 415/422.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!("Rejected request body: {}", rejection.body_text());
            AppError::from(AuthError::MalformedRequest)
        })?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// `{id}` path segment parsed as a UUID.
#[derive(Debug, Clone, Copy)]
pub struct RecipeId(pub Uuid);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::from(AuthError::InvalidIdentifier))?;

        Uuid::parse_str(&raw).map(Self).map_err(|e| {
            warn!("Invalid recipe id '{}': {}", raw, e);
            AppError::from(AuthError::InvalidIdentifier)
        })
    }
}
