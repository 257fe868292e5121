//! Secret provisioning - Risoluzione del segreto di firma JWT ad ogni chiamata
//!
//! Il segreto non viene mai letto una sola volta all'avvio: sia l'emissione che la
//! verifica dei token passano da un `SecretProvider` condiviso, così una rotazione
//! del segreto è visibile alla chiamata successiva.

use crate::core::AuthError;
use std::env;
use std::sync::{Arc, RwLock};
use tracing::error;

/// Default environment variable holding the signing secret.
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Source of the symmetric signing secret.
pub trait SecretProvider: Send + Sync {
    /// Raw lookup. `None` when the source holds no value.
    fn lookup(&self) -> Option<String>;

    /// Resolves the secret for a single sign or verify call.
    ///
    /// An absent or empty secret is a configuration error: the caller must
    /// abort rather than sign with, or accept tokens under, an empty key.
    fn current_secret(&self) -> Result<Vec<u8>, AuthError> {
        match self.lookup() {
            Some(secret) if !secret.is_empty() => Ok(secret.into_bytes()),
            _ => {
                error!("Signing secret is missing or empty");
                Err(AuthError::Configuration)
            }
        }
    }
}

/// Reads the secret from a process environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new(JWT_SECRET_VAR)
    }
}

impl SecretProvider for EnvSecret {
    fn lookup(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

/// In-process secret that can be rotated at runtime.
///
/// Clones share the same value, so a rotation through one handle is seen by
/// every issuer and verifier built from another.
#[derive(Debug, Clone, Default)]
pub struct SharedSecret {
    inner: Arc<RwLock<String>>,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(secret.into())),
        }
    }

    /// Replaces the secret. Tokens signed under the old value stop verifying.
    pub fn rotate(&self, secret: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = secret.into();
    }
}

impl SecretProvider for SharedSecret {
    fn lookup(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(guard.clone())
    }
}
