//! Docs - Documento OpenAPI generato dagli handler annotati e Swagger UI
//!
//! Il documento è servito su `/swagger/doc.json`, la UI sotto `/swagger/`.

use crate::core::error::ErrorBody;
use crate::dtos::{LoginDTO, RecipeDTO, TokenDTO};
use crate::entities::Recipe;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Name of the bearer scheme referenced by the protected routes.
pub const BEARER_SCHEME: &str = "bearer_auth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        description = "CRUD delle ricette dietro un token JWT emesso da /login"
    ),
    paths(
        crate::services::auth::login_user,
        crate::services::recipe::list_recipes,
        crate::services::recipe::get_recipe,
        crate::services::recipe::create_recipe,
        crate::services::recipe::update_recipe,
        crate::services::recipe::delete_recipe,
    ),
    components(schemas(LoginDTO, TokenDTO, RecipeDTO, Recipe, ErrorBody)),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Emissione dei token"),
        (name = "receitas", description = "Ricette, richiedono Authorization: Bearer <token>"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_SCHEME,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Swagger UI sotto `/swagger/` con il documento su `/swagger/doc.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger").url("/swagger/doc.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/login"));
        assert!(paths.iter().any(|p| *p == "/api/receitas"));
        assert!(paths.iter().any(|p| *p == "/api/receitas/{id}"));
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
    }
}
