//! RecipeRepository - Repository PostgreSQL per la tabella `receitas`

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::RecipeDTO;
use crate::entities::{CREATE_TABLE_QUERY, Recipe};
use sqlx::{Error, PgPool};
use tracing::{debug, info, instrument};
use uuid::Uuid;

// RECIPE REPOSITORY
pub struct RecipeRepository {
    connection_pool: PgPool,
}

impl RecipeRepository {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }

    /// Crea la tabella se non esiste ancora
    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::query(CREATE_TABLE_QUERY)
            .execute(&self.connection_pool)
            .await?;
        info!("Table receitas ready");
        Ok(())
    }
}

impl Create<Recipe, RecipeDTO> for RecipeRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &RecipeDTO) -> Result<Recipe, Error> {
        debug!("Creating new recipe");
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO receitas (nome, descricao, ingredientes, instrucoes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, descricao, ingredientes, instrucoes
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.ingredients)
        .bind(&data.instructions)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Recipe created with id {}", recipe.id);
        Ok(recipe)
    }
}

impl Read<Recipe, Uuid> for RecipeRepository {
    #[instrument(skip(self), fields(id = %id))]
    async fn read(&self, id: &Uuid) -> Result<Option<Recipe>, Error> {
        debug!("Reading recipe");
        sqlx::query_as::<_, Recipe>(
            "SELECT id, nome, descricao, ingredientes, instrucoes FROM receitas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl ReadAll<Recipe> for RecipeRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Recipe>, Error> {
        debug!("Listing recipes");
        sqlx::query_as::<_, Recipe>(
            "SELECT id, nome, descricao, ingredientes, instrucoes FROM receitas",
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Update<Recipe, RecipeDTO, Uuid> for RecipeRepository {
    #[instrument(skip(self, data), fields(id = %id))]
    async fn update(&self, id: &Uuid, data: &RecipeDTO) -> Result<Recipe, Error> {
        debug!("Updating recipe");
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE receitas
            SET nome = $1, descricao = $2, ingredientes = $3, instrucoes = $4
            WHERE id = $5
            RETURNING id, nome, descricao, ingredientes, instrucoes
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.ingredients)
        .bind(&data.instructions)
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)?;

        info!("Recipe {} updated", id);
        Ok(recipe)
    }
}

impl Delete<Uuid> for RecipeRepository {
    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        debug!("Deleting recipe");
        let result = sqlx::query("DELETE FROM receitas WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Recipe {} deleted", id);
        Ok(())
    }
}
