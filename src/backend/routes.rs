//! Hero HTTP Routes
//!
//! Collection endpoints for the in-memory backend:
//!
//! - `GET /heroes` (optionally `?name=<term>`)
//! - `GET /heroes/:id`
//! - `POST /heroes`
//! - `PUT /heroes`
//! - `DELETE /heroes/:id`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::hero::{Hero, HeroId, NewHero};

use super::errors::{ApiError, ApiResult};
use super::store::HeroStore;

// ==================
// Shared State
// ==================

/// Backend state shared across handlers
#[derive(Debug)]
pub struct BackendState {
    pub store: HeroStore,
    latency: Duration,
}

impl BackendState {
    pub fn new(store: HeroStore) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    /// Delay every hero response by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for BackendState {
    fn default() -> Self {
        Self::new(HeroStore::seeded())
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHeroRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ==================
// Routes
// ==================

/// Create hero routes
pub fn hero_routes(state: Arc<BackendState>) -> Router {
    Router::new()
        .route(
            "/heroes",
            get(list_heroes_handler)
                .post(create_hero_handler)
                .put(update_hero_handler),
        )
        .route(
            "/heroes/:id",
            get(get_hero_handler).delete(delete_hero_handler),
        )
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn list_heroes_handler(
    State(state): State<Arc<BackendState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Hero>> {
    state.simulate_latency().await;
    Json(state.store.list(query.name.as_deref()))
}

async fn get_hero_handler(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<HeroId>,
) -> ApiResult<Json<Hero>> {
    state.simulate_latency().await;
    Ok(Json(state.store.get(id)?))
}

async fn create_hero_handler(
    State(state): State<Arc<BackendState>>,
    body: Result<Json<CreateHeroRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Hero>)> {
    state.simulate_latency().await;
    let Json(request) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let hero = NewHero::new(&request.name)?;
    Ok((StatusCode::CREATED, Json(state.store.insert(hero)?)))
}

async fn update_hero_handler(
    State(state): State<Arc<BackendState>>,
    body: Result<Json<Hero>, JsonRejection>,
) -> ApiResult<StatusCode> {
    state.simulate_latency().await;
    let Json(hero) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    state.store.update(hero)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_hero_handler(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<HeroId>,
) -> ApiResult<StatusCode> {
    state.simulate_latency().await;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
