//! Recipe services - CRUD delle ricette, raggiungibile solo dopo l'autenticazione

use crate::core::error::ErrorBody;
use crate::core::{AppError, AppState, Identity, RecipeId, ValidJson};
use crate::dtos::RecipeDTO;
use crate::entities::Recipe;
use crate::repositories::RecipeStore;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/* ordine degli estrattori: State, RecipeId (path), Extension (identità dal middleware), Json per ultimo
   perché consuma il body */

/// GET /api/receitas
#[utoipa::path(
    get,
    path = "/api/receitas",
    responses(
        (status = 200, description = "All recipes", body = [Recipe]),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "receitas"
)]
#[instrument(skip(state, identity), fields(user = %identity.username))]
pub async fn list_recipes<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.recipes.read_all().await?;
    Ok(Json(recipes))
}

/// GET /api/receitas/{id}
#[utoipa::path(
    get,
    path = "/api/receitas/{id}",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 400, description = "Invalid recipe identifier", body = ErrorBody),
        (status = 404, description = "Recipe not found", body = ErrorBody),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "receitas"
)]
#[instrument(skip(state, identity), fields(user = %identity.username))]
pub async fn get_recipe<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    RecipeId(id): RecipeId,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state
        .recipes
        .read(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Recipe not found"))?;
    Ok(Json(recipe))
}

/// POST /api/receitas
#[utoipa::path(
    post,
    path = "/api/receitas",
    request_body = RecipeDTO,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "receitas"
)]
#[instrument(skip(state, identity, body), fields(user = %identity.username))]
pub async fn create_recipe<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(identity): Extension<Identity>,
    ValidJson(body): ValidJson<RecipeDTO>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.recipes.create(&body).await?;
    info!("Recipe {} created by {}", recipe.id, identity.username);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /api/receitas/{id}
#[utoipa::path(
    put,
    path = "/api/receitas/{id}",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = RecipeDTO,
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 400, description = "Invalid identifier or body", body = ErrorBody),
        (status = 404, description = "Recipe not found", body = ErrorBody),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "receitas"
)]
#[instrument(skip(state, identity, body), fields(user = %identity.username))]
pub async fn update_recipe<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    RecipeId(id): RecipeId,
    Extension(identity): Extension<Identity>,
    ValidJson(body): ValidJson<RecipeDTO>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state.recipes.update(&id, &body).await?;
    info!("Recipe {} updated by {}", id, identity.username);
    Ok(Json(recipe))
}

/// DELETE /api/receitas/{id}
#[utoipa::path(
    delete,
    path = "/api/receitas/{id}",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 400, description = "Invalid recipe identifier", body = ErrorBody),
        (status = 404, description = "Recipe not found", body = ErrorBody),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Signing secret not configured", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "receitas"
)]
#[instrument(skip(state, identity), fields(user = %identity.username))]
pub async fn delete_recipe<S: RecipeStore>(
    State(state): State<Arc<AppState<S>>>,
    RecipeId(id): RecipeId,
    Extension(identity): Extension<Identity>,
) -> Result<StatusCode, AppError> {
    state.recipes.delete(&id).await?;
    info!("Recipe {} deleted by {}", id, identity.username);
    Ok(StatusCode::NO_CONTENT)
}
