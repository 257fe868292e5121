//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod docs;
pub mod recipe;

// Re-exports per facilitare l'import
pub use auth::login_user;
pub use docs::{ApiDoc, swagger_ui};
pub use recipe::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}
