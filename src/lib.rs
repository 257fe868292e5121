//! Recipe API library - espone i moduli principali per il binario e per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, AuthError, Config, auth};
pub use services::root;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use repositories::RecipeStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
///
/// Route pubbliche: `/`, `/login`, Swagger UI sotto `/swagger/` e `/swagger/doc.json`.
/// Tutto ciò che sta sotto `/api` passa dal middleware di autenticazione.
pub fn create_router<S: RecipeStore>(state: Arc<AppState<S>>) -> Router {
    use crate::services::*;

    Router::new()
        .route("/", get(root))
        .route("/login", post(login_user::<S>))
        .nest("/api", configure_protected_routes(state.clone()))
        .with_state(state)
        .merge(swagger_ui())
}

/// Configura le routes protette.
///
/// Il middleware è applicato all'intero gruppo e non alle singole route:
/// ogni route aggiunta qui è coperta dalla verifica del token.
fn configure_protected_routes<S: RecipeStore>(
    state: Arc<AppState<S>>,
) -> Router<Arc<AppState<S>>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/receitas", get(list_recipes::<S>).post(create_recipe::<S>))
        .route(
            "/receitas/{id}",
            get(get_recipe::<S>)
                .put(update_recipe::<S>)
                .delete(delete_recipe::<S>),
        )
        .layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            authentication_middleware,
        ))
}

/// CORS per il frontend: una sola origine, credenziali ammesse
pub fn cors_layer(config: &Config) -> Result<CorsLayer, String> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| format!("Invalid CORS_ORIGIN: {e}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
