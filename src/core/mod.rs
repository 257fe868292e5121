//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Provisioning del segreto di firma
//! - Configurazione
//! - Gestione errori
//! - Estrattori delle richieste
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod secret;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{
    Claims, Credential, Identity, TokenIssuer, TokenVerifier, authentication_middleware,
};
pub use config::Config;
pub use error::{AppError, AuthError};
pub use extract::{RecipeId, ValidJson};
pub use secret::{EnvSecret, SecretProvider, SharedSecret};
pub use state::AppState;
