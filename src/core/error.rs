//! Error types - Tassonomia degli errori di autenticazione e risposta HTTP

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures detected by the authentication boundary.
///
/// Every variant is terminal for the request: there is no retry and no
/// downgrade to an anonymous request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("malformed request body")]
    MalformedRequest,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("missing or malformed bearer token")]
    MissingOrMalformedToken,
    #[error("invalid or expired token")]
    InvalidOrExpiredToken,
    #[error("invalid identifier")]
    InvalidIdentifier,
    #[error("signing secret is not configured")]
    Configuration,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest | Self::InvalidIdentifier => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::MissingOrMalformedToken
            | Self::InvalidOrExpiredToken => StatusCode::UNAUTHORIZED,
            Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Never carries internal state.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MalformedRequest => "Malformed request body",
            Self::InvalidCredentials => "Invalid username or password",
            Self::MissingOrMalformedToken => "Missing or malformed token",
            Self::InvalidOrExpiredToken => "Invalid or expired token",
            Self::InvalidIdentifier => "Invalid recipe identifier",
            Self::Configuration => "Server authentication is not configured",
        }
    }
}

/// Corpo JSON di ogni risposta d'errore
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid or expired token")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self::new(err.status(), err.message())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Recipe not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorBody {
            error: self.message.to_string(),
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
