//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod auth;
pub mod recipe;

// Re-exports
pub use auth::{LoginDTO, TokenDTO};
pub use recipe::RecipeDTO;
