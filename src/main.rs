use recipe_api::core::{AppState, Config, EnvSecret, SecretProvider};
use recipe_api::repositories::RecipeRepository;
use recipe_api::{cors_layer, create_router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.log_info();

    // Pool di connessioni e migrazione della tabella
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.database.clone())
        .await?;
    info!("Database connection established");

    let recipes = RecipeRepository::new(pool);
    recipes.migrate().await?;

    // Il segreto viene letto dall'ambiente ad ogni richiesta, non qui
    let secret: Arc<dyn SecretProvider> = Arc::new(EnvSecret::new(&config.jwt_secret_var));
    let state = Arc::new(AppState::new(recipes, config.credential.clone(), secret));

    let app = create_router(state).layer(cors_layer(&config)?);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
