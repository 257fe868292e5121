#![allow(dead_code)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use recipe_api::core::{AppState, Credential, SecretProvider, SharedSecret};
use recipe_api::dtos::{RecipeDTO, TokenDTO};
use recipe_api::entities::Recipe;
use recipe_api::repositories::{
    Create, Delete, MemoryRecipeRepository, Read, ReadAll, RecipeStore, Update,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

pub const TEST_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Store in memoria che conta quante volte viene raggiunto dagli handler
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: MemoryRecipeRepository,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Create<Recipe, RecipeDTO> for CountingStore {
    async fn create(&self, data: &RecipeDTO) -> Result<Recipe, sqlx::Error> {
        self.hit();
        self.inner.create(data).await
    }
}

impl Read<Recipe, Uuid> for CountingStore {
    async fn read(&self, id: &Uuid) -> Result<Option<Recipe>, sqlx::Error> {
        self.hit();
        self.inner.read(id).await
    }
}

impl ReadAll<Recipe> for CountingStore {
    async fn read_all(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        self.hit();
        self.inner.read_all().await
    }
}

impl Update<Recipe, RecipeDTO, Uuid> for CountingStore {
    async fn update(&self, id: &Uuid, data: &RecipeDTO) -> Result<Recipe, sqlx::Error> {
        self.hit();
        self.inner.update(id, data).await
    }
}

impl Delete<Uuid> for CountingStore {
    async fn delete(&self, id: &Uuid) -> Result<(), sqlx::Error> {
        self.hit();
        self.inner.delete(id).await
    }
}

/// Crea un AppState per i test sopra lo store in memoria
///
/// # Arguments
/// * `secret` - Segreto condiviso; i test possono ruotarlo o svuotarlo
pub fn create_test_state(secret: &SharedSecret) -> Arc<AppState<CountingStore>> {
    let provider: Arc<dyn SecretProvider> = Arc::new(secret.clone());
    Arc::new(AppState::new(
        CountingStore::default(),
        Credential::default(),
        provider,
    ))
}

/// Crea un TestServer per i test
pub fn create_test_server<S: RecipeStore>(state: Arc<AppState<S>>) -> TestServer {
    let app = recipe_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Esegue il login con la credenziale valida e ritorna il token
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "username": "bruno", "password": "senha123" }))
        .await;
    response.assert_status_ok();
    response.json::<TokenDTO>().token
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value")
}

pub fn sample_recipe() -> serde_json::Value {
    json!({
        "nome": "Bolo de cenoura",
        "descricao": "Bolo fofinho com cobertura de chocolate",
        "ingredientes": ["cenoura", "farinha", "ovos", "açúcar"],
        "instrucoes": "Bater tudo no liquidificador e assar por 40 minutos"
    })
}
