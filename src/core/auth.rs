//! Auth - Emissione e verifica dei token JWT e middleware di autenticazione
//!
//! - `TokenIssuer`: confronta le credenziali con l'unica coppia valida e firma un token HS256
//! - `TokenVerifier`: estrae il bearer token, verifica firma e scadenza
//! - `authentication_middleware`: applicato a livello di gruppo alle route protette

use crate::core::{AppError, AuthError, SecretProvider};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

const BEARER_PREFIX: &str = "Bearer ";

// struct che codifica il contenuto del token jwt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub iat: i64, // Issued at (unix seconds)
    pub exp: i64, // Expiry (unix seconds)
}

/// The single username/password pair accepted by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new("bruno", "senha123")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Identity of the caller, attached to the request extensions once its token verifies.
/// Lives only as long as the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

#[derive(Clone)]
pub struct TokenIssuer {
    credential: Credential,
    secret: Arc<dyn SecretProvider>,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(credential: Credential, secret: Arc<dyn SecretProvider>) -> Self {
        Self {
            credential,
            secret,
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    pub fn issue(&self, username: &str, password: &str) -> Result<String, AuthError> {
        self.issue_at(username, password, Utc::now())
    }

    /// Checks the credential and signs a token valid from `now` for one hour.
    ///
    /// The secret is resolved first, so an unconfigured server answers every
    /// login with `Configuration` regardless of the submitted credential.
    #[instrument(skip(self, password, now), fields(username = %username))]
    pub fn issue_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        debug!("Issuing JWT token");
        let secret = self.secret.current_secret()?;

        if !self.credential.matches(username, password) {
            warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&secret),
        )
        .map(|token| {
            info!("JWT token issued");
            token
        })
        .map_err(|e| {
            error!("Failed to encode JWT token: {:?}", e);
            AuthError::Configuration
        })
    }
}

#[derive(Clone)]
pub struct TokenVerifier {
    secret: Arc<dyn SecretProvider>,
}

impl TokenVerifier {
    pub fn new(secret: Arc<dyn SecretProvider>) -> Self {
        Self { secret }
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        self.verify_at(headers, Utc::now())
    }

    /// Validates the `Authorization` header of a request as of `now`.
    ///
    /// Steps short-circuit in order: bearer prefix, secret resolution,
    /// signature and expiry.
    #[instrument(skip(self, headers, now))]
    pub fn verify_at(
        &self,
        headers: &HeaderMap,
        now: DateTime<Utc>,
    ) -> Result<Identity, AuthError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| {
                warn!("Missing or malformed authorization header");
                AuthError::MissingOrMalformedToken
            })?;

        let claims = self.decode_at(token, now)?;
        Ok(Identity {
            username: claims.username,
        })
    }

    #[instrument(skip(self, token, now))]
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        debug!("Decoding JWT token");
        let secret = self.secret.current_secret()?;

        // La scadenza è controllata sotto con `now` esplicito e senza leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&secret), &validation)
            .map_err(|e| {
                warn!("Failed to decode JWT token: {:?}", e.kind());
                AuthError::InvalidOrExpiredToken
            })?;

        if data.claims.exp <= now.timestamp() {
            warn!("Expired JWT token for user: {}", data.claims.username);
            return Err(AuthError::InvalidOrExpiredToken);
        }

        debug!("JWT token decoded successfully for user: {}", data.claims.username);
        Ok(data.claims)
    }
}

#[instrument(skip(verifier, req, next), fields(method = %req.method(), path = %req.uri().path()))]
pub async fn authentication_middleware(
    State(verifier): State<TokenVerifier>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    debug!("Running authentication middleware");
    let identity = verifier.verify(req.headers())?;
    info!("User authenticated: {}", identity.username);
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedSecret;
    use axum::http::HeaderValue;

    fn setup(secret: &SharedSecret) -> (TokenIssuer, TokenVerifier) {
        let provider: Arc<dyn SecretProvider> = Arc::new(secret.clone());
        (
            TokenIssuer::new(Credential::default(), provider.clone()),
            TokenVerifier::new(provider),
        )
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn issued_token_verifies_immediately() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);

        let token = issuer.issue("bruno", "senha123").unwrap();
        let identity = verifier.verify(&bearer(&token)).unwrap();
        assert_eq!(identity.username, "bruno");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, _) = setup(&secret);

        assert_eq!(issuer.issue("bruno", "wrong"), Err(AuthError::InvalidCredentials));
        assert_eq!(issuer.issue("Bruno", "senha123"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);
        let issued_at = Utc::now();

        let token = issuer.issue_at("bruno", "senha123", issued_at).unwrap();
        let expires_at = issued_at + Duration::seconds(TOKEN_TTL_SECS);

        assert!(verifier.verify_at(&bearer(&token), expires_at - Duration::seconds(1)).is_ok());
        assert_eq!(
            verifier.verify_at(&bearer(&token), expires_at),
            Err(AuthError::InvalidOrExpiredToken)
        );
        assert_eq!(
            verifier.verify_at(&bearer(&token), expires_at + Duration::seconds(1)),
            Err(AuthError::InvalidOrExpiredToken)
        );
    }

    #[test]
    fn any_signature_mutation_is_rejected() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);
        let token = issuer.issue("bruno", "senha123").unwrap();

        let signature_start = token.rfind('.').unwrap() + 1;
        for index in signature_start..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert_eq!(
                verifier.verify(&bearer(&tampered)),
                Err(AuthError::InvalidOrExpiredToken),
                "mutation at byte {index} was accepted"
            );
        }
    }

    #[test]
    fn verification_is_idempotent() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);
        let token = issuer.issue("bruno", "senha123").unwrap();

        let first = verifier.verify(&bearer(&token)).unwrap();
        let second = verifier.verify(&bearer(&token)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn header_must_carry_case_sensitive_bearer_prefix() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);
        let token = issuer.issue("bruno", "senha123").unwrap();

        assert_eq!(
            verifier.verify(&HeaderMap::new()),
            Err(AuthError::MissingOrMalformedToken)
        );

        for value in [format!("bearer {token}"), format!("Bearer{token}"), token.clone()] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap());
            assert_eq!(verifier.verify(&headers), Err(AuthError::MissingOrMalformedToken));
        }

        assert_eq!(verifier.verify(&bearer("")), Err(AuthError::InvalidOrExpiredToken));
    }

    #[test]
    fn unset_secret_never_accepts() {
        let secret = SharedSecret::new("test-secret");
        let (issuer, verifier) = setup(&secret);
        let token = issuer.issue("bruno", "senha123").unwrap();

        secret.rotate("");
        assert_eq!(issuer.issue("bruno", "senha123"), Err(AuthError::Configuration));
        assert_eq!(issuer.issue("bruno", "wrong"), Err(AuthError::Configuration));
        assert_eq!(verifier.verify(&bearer(&token)), Err(AuthError::Configuration));
    }

    #[test]
    fn header_is_checked_before_secret() {
        let secret = SharedSecret::new("");
        let (_, verifier) = setup(&secret);

        assert_eq!(
            verifier.verify(&HeaderMap::new()),
            Err(AuthError::MissingOrMalformedToken)
        );

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc"));
        assert_eq!(verifier.verify(&headers), Err(AuthError::MissingOrMalformedToken));

        assert_eq!(verifier.verify(&bearer("abc")), Err(AuthError::Configuration));
    }

    #[test]
    fn rotation_invalidates_outstanding_tokens() {
        let secret = SharedSecret::new("before");
        let (issuer, verifier) = setup(&secret);
        let token = issuer.issue("bruno", "senha123").unwrap();

        secret.rotate("after");
        assert_eq!(verifier.verify(&bearer(&token)), Err(AuthError::InvalidOrExpiredToken));

        let fresh = issuer.issue("bruno", "senha123").unwrap();
        assert!(verifier.verify(&bearer(&fresh)).is_ok());
    }

    #[test]
    fn credential_debug_hides_password() {
        let rendered = format!("{:?}", Credential::default());
        assert!(!rendered.contains("senha123"));
    }
}
