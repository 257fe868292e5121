//! Config - Configurazione del server caricata dalle variabili d'ambiente
//!
//! Il segreto JWT non fa parte della configurazione caricata: qui si registra
//! solo il nome della variabile, che viene letta ad ogni firma/verifica.

use crate::core::auth::Credential;
use crate::core::secret::JWT_SECRET_VAR;
use dotenv::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: PgConnectOptions,
    pub jwt_secret_var: String,
    pub credential: Credential,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub cors_origin: String,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database = match env::var("DATABASE_URL") {
            Ok(url) => PgConnectOptions::from_str(&url)
                .map_err(|e| format!("Invalid DATABASE_URL: {e}"))?,
            Err(_) => Self::database_from_parts()?,
        };

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .or_else(|_| env::var("PORT"))
            .unwrap_or_else(|_| "5555".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let defaults = Credential::default();
        let credential = Credential::new(
            env::var("AUTH_USERNAME").unwrap_or(defaults.username),
            env::var("AUTH_PASSWORD").unwrap_or(defaults.password),
        );
        if credential.username.is_empty() || credential.password.is_empty() {
            return Err("AUTH_USERNAME and AUTH_PASSWORD must not be empty".to_string());
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database,
            jwt_secret_var: JWT_SECRET_VAR.to_string(),
            credential,
            server_host,
            server_port,
            max_connections,
            cors_origin,
            app_env,
        })
    }

    /// Assembla le opzioni di connessione da DB_HOST, DB_PORT, DB_USERNAME, ...
    fn database_from_parts() -> Result<PgConnectOptions, String> {
        let name = env::var("DB_NAME")
            .map_err(|_| "DATABASE_URL or DB_NAME must be set in .env file".to_string())?;

        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid DB_PORT: must be a number between 0-65535".to_string())?;

        let mut options = PgConnectOptions::new()
            .host(&env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()))
            .port(port)
            .database(&name);

        if let Ok(username) = env::var("DB_USERNAME") {
            options = options.username(&username);
        }
        if let Ok(password) = env::var("DB_PASSWORD") {
            options = options.password(&password);
        }
        if let Ok(schema) = env::var("DB_SCHEMA") {
            options = options.options([("search_path", schema.as_str())]);
        }

        Ok(options)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn log_info(&self) {
        info!("Environment: {}", self.app_env);
        info!("Server address: {}:{}", self.server_host, self.server_port);
        info!(
            "Database: {}:{}/{}",
            self.database.get_host(),
            self.database.get_port(),
            self.database.get_database().unwrap_or("-")
        );
        info!("Max DB connections: {}", self.max_connections);
        info!("CORS origin: {}", self.cors_origin);
        match env::var(&self.jwt_secret_var) {
            Ok(secret) if !secret.is_empty() => {
                info!("JWT secret: configured via {}", self.jwt_secret_var)
            }
            _ => warn!(
                "{} is not set: login and protected routes will answer 500 until it is",
                self.jwt_secret_var
            ),
        }
    }
}
