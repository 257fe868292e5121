//! MemoryRecipeRepository - Store delle ricette in memoria, senza database
//!
//! Stessa semantica del repository PostgreSQL (id generato in creazione,
//! `RowNotFound` su update/delete di un id assente).

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::RecipeDTO;
use crate::entities::Recipe;
use dashmap::DashMap;
use sqlx::Error;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryRecipeRepository {
    recipes: Arc<DashMap<Uuid, Recipe>>,
}

impl MemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Create<Recipe, RecipeDTO> for MemoryRecipeRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &RecipeDTO) -> Result<Recipe, Error> {
        let recipe = data.clone().into_recipe(Uuid::new_v4());
        self.recipes.insert(recipe.id, recipe.clone());
        debug!("Recipe {} stored in memory", recipe.id);
        Ok(recipe)
    }
}

impl Read<Recipe, Uuid> for MemoryRecipeRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Recipe>, Error> {
        Ok(self.recipes.get(id).map(|entry| entry.value().clone()))
    }
}

impl ReadAll<Recipe> for MemoryRecipeRepository {
    async fn read_all(&self) -> Result<Vec<Recipe>, Error> {
        Ok(self
            .recipes
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

impl Update<Recipe, RecipeDTO, Uuid> for MemoryRecipeRepository {
    #[instrument(skip(self, data), fields(id = %id))]
    async fn update(&self, id: &Uuid, data: &RecipeDTO) -> Result<Recipe, Error> {
        let mut entry = self.recipes.get_mut(id).ok_or(Error::RowNotFound)?;
        *entry = data.clone().into_recipe(*id);
        Ok(entry.clone())
    }
}

impl Delete<Uuid> for MemoryRecipeRepository {
    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        self.recipes
            .remove(id)
            .map(|_| ())
            .ok_or(Error::RowNotFound)
    }
}
