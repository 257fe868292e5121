//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene il repository delle ricette e i due lati dell'autenticazione,
//! costruiti a partire dallo stesso `SecretProvider`.

use crate::core::auth::{Credential, TokenIssuer, TokenVerifier};
use crate::core::SecretProvider;
use crate::repositories::RecipeStore;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState<S> {
    /// Repository per la gestione delle ricette
    pub recipes: S,

    /// Emissione dei token per `/login`
    pub issuer: TokenIssuer,

    /// Verifica dei token per il gruppo di route protette
    pub verifier: TokenVerifier,
}

impl<S: RecipeStore> AppState<S> {
    /// Crea una nuova istanza di AppState.
    ///
    /// # Arguments
    /// * `recipes` - Store delle ricette
    /// * `credential` - Unica coppia username/password accettata
    /// * `secret` - Sorgente del segreto di firma, condivisa da issuer e verifier
    pub fn new(recipes: S, credential: Credential, secret: Arc<dyn SecretProvider>) -> Self {
        Self {
            recipes,
            issuer: TokenIssuer::new(credential, secret.clone()),
            verifier: TokenVerifier::new(secret),
        }
    }
}
