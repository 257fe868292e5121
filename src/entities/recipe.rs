//! Recipe entity - Ricetta persistita nella tabella `receitas`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Nomi di campo JSON e colonne mantengono il formato già usato dal frontend.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Uuid,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[sqlx(rename = "descricao")]
    pub description: String,
    #[serde(rename = "ingredientes")]
    #[sqlx(rename = "ingredientes")]
    pub ingredients: Vec<String>,
    #[serde(rename = "instrucoes")]
    #[sqlx(rename = "instrucoes")]
    pub instructions: String,
}

// Migration
pub const CREATE_TABLE_QUERY: &str = r#"
CREATE TABLE IF NOT EXISTS receitas (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    nome TEXT NOT NULL,
    descricao TEXT NOT NULL,
    ingredientes TEXT[] NOT NULL,
    instrucoes TEXT NOT NULL
)
"#;
