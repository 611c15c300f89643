//! # In-memory Hero Backend
//!
//! Stands in for a remote REST store. The same router is either served
//! over TCP (`heroes serve`) or called in-process by the gateway's
//! [`RouterTransport`](crate::gateway::RouterTransport).
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `<api_root>/heroes` - Hero collection

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;
pub mod store;

pub use config::BackendConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{health_routes, hero_routes, BackendState};
pub use server::BackendServer;
pub use store::{seed_heroes, HeroStore};
