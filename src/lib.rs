//! heroes - hero roster gateway with an in-memory REST backend
//!
//! - [`hero`]: the record model
//! - [`messages`]: shared notification log
//! - [`gateway`]: CRUD/search access with classified, never-raised failures
//! - [`backend`]: in-memory axum backend standing in for the remote store
//! - [`views`]: presentation state for list, dashboard, detail and search
//! - [`app`]: composition root wiring one log and one gateway into views

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod hero;
pub mod messages;
pub mod observability;
pub mod views;
