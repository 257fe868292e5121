//! Auth DTOs - Corpo della richiesta di login e risposta con il token

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO per il login (solo username e password)
#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct LoginDTO {
    #[schema(example = "bruno")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct TokenDTO {
    pub token: String,
}
