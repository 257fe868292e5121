//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod recipe;

// Re-exports per facilitare l'import
pub use recipe::{CREATE_TABLE_QUERY, Recipe};
