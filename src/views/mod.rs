//! Presentation state for the hero screens
//!
//! Views own their local data and talk to the backend only through a
//! shared [`HeroGateway`](crate::gateway::HeroGateway). Rendering is left
//! to the caller.

pub mod dashboard;
pub mod detail;
pub mod roster;
pub mod search;

pub use dashboard::Dashboard;
pub use detail::HeroDetail;
pub use roster::Roster;
pub use search::{HeroSearch, SearchUpdate, DEFAULT_DEBOUNCE};
