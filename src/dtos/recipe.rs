//! Recipe DTOs - Dati in ingresso per creare o sostituire una ricetta

use crate::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// DTO per creare o aggiornare una ricetta (senza id, che arriva dal path o dal database)
#[derive(Serialize, Deserialize, Validate, ToSchema, Debug, Clone)]
pub struct RecipeDTO {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "Recipe name is required"))]
    #[schema(example = "Bolo de cenoura")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "ingredientes", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "instrucoes", default)]
    pub instructions: String,
}

impl RecipeDTO {
    pub fn into_recipe(self, id: Uuid) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}
