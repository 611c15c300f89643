//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in the heroes service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Backend server starting to listen
    ServerStart,
    /// Backend server stopped
    ServerStop,

    // Backend
    /// Hero store seeded with initial records
    StoreSeeded,
    /// Backend rejected a request
    ApiRequestRejected,

    // Gateway
    /// Gateway request completed
    GatewayRequestOk,
    /// Gateway request failed; fallback returned
    GatewayRequestFailed,

    // Search
    /// Search response discarded because a newer search was issued
    SearchResponseStale,
}

impl Event {
    /// Returns the string representation for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ApiRequestRejected => "API_REQUEST_REJECTED",
            Event::GatewayRequestOk => "GATEWAY_REQUEST_OK",
            Event::GatewayRequestFailed => "GATEWAY_REQUEST_FAILED",
            Event::SearchResponseStale => "SEARCH_RESPONSE_STALE",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::GatewayRequestOk => Severity::Trace,
            Event::ApiRequestRejected | Event::SearchResponseStale => Severity::Warn,
            Event::GatewayRequestFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
