//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di persistenza per una specifica entità.
//! Gli handler HTTP dipendono solo da `RecipeStore`, così PostgreSQL e lo store
//! in memoria sono intercambiabili.

pub mod memory;
pub mod recipe;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

pub use memory::MemoryRecipeRepository;
pub use recipe::RecipeRepository;

use crate::dtos::RecipeDTO;
use crate::entities::Recipe;
use uuid::Uuid;

/// Insieme delle operazioni CRUD richieste dagli handler delle ricette
pub trait RecipeStore:
    Create<Recipe, RecipeDTO>
    + Read<Recipe, Uuid>
    + ReadAll<Recipe>
    + Update<Recipe, RecipeDTO, Uuid>
    + Delete<Uuid>
    + Send
    + Sync
    + 'static
{
}

impl<T> RecipeStore for T where
    T: Create<Recipe, RecipeDTO>
        + Read<Recipe, Uuid>
        + ReadAll<Recipe>
        + Update<Recipe, RecipeDTO, Uuid>
        + Delete<Uuid>
        + Send
        + Sync
        + 'static
{
}
