//! # Backend HTTP Server
//!
//! Combines the hero and health routers into one axum application that can
//! be served over TCP or handed to an in-process transport.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event};

use super::config::BackendConfig;
use super::routes::{health_routes, hero_routes, BackendState};
use super::store::HeroStore;

/// In-memory hero backend
pub struct BackendServer {
    config: BackendConfig,
    state: Arc<BackendState>,
    router: Router,
}

impl BackendServer {
    /// Create a seeded backend with default configuration
    pub fn new() -> Self {
        Self::with_config(BackendConfig::default())
    }

    /// Create a seeded backend with custom configuration
    pub fn with_config(config: BackendConfig) -> Self {
        let store = HeroStore::seeded();
        log_event_with_fields(Event::StoreSeeded, &[("heroes", store.len().to_string().as_str())]);
        Self::with_store(config, store)
    }

    /// Create a backend over an existing store
    pub fn with_store(config: BackendConfig, store: HeroStore) -> Self {
        let state = Arc::new(BackendState::new(store).with_latency(config.latency()));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(config: &BackendConfig, state: Arc<BackendState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let heroes = hero_routes(state);
        let api = if config.api_root == "/" {
            Router::new().merge(heroes)
        } else {
            Router::new().nest(&config.api_root, heroes)
        };

        Router::new()
            .merge(health_routes())
            .merge(api)
            .layer(cors)
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Shared backend state (store access for tests and tooling)
    pub fn state(&self) -> Arc<BackendState> {
        self.state.clone()
    }

    /// Get a handle to the router
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve until ctrl-c
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?.to_string();
        log_event_with_fields(
            Event::ServerStart,
            &[("addr", local.as_str()), ("api_root", self.config.api_root.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ServerStop);
        Ok(())
    }
}

impl Default for BackendServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
