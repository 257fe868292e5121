//! Auth services - Login con l'unica credenziale configurata

use crate::core::error::ErrorBody;
use crate::core::{AppError, AppState, ValidJson};
use crate::dtos::{LoginDTO, TokenDTO};
use crate::repositories::RecipeStore;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::instrument;

/// POST /login - scambia la credenziale con un token valido un'ora
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginDTO,
    responses(
        (status = 200, description = "Token issued", body = TokenDTO),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 401, description = "Invalid username or password", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    tag = "auth"
)]
#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    ValidJson(body): ValidJson<LoginDTO>, // JSON body
) -> Result<Json<TokenDTO>, AppError> {
    // 1. Il body è già stato validato dall'estrattore (400 se malformato o con campi vuoti)
    // 2. L'issuer risolve il segreto corrente (500 se assente)
    // 3. Confronta le credenziali (401 se errate) e firma il token
    let token = state.issuer.issue(&body.username, &body.password)?;
    Ok(Json(TokenDTO { token }))
}
