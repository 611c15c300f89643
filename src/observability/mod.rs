//! Observability for the heroes service
//!
//! Structured JSON logging with typed events. This is the diagnostic
//! channel: operator-facing detail goes here, while user-facing status
//! lines go to the [`MessageLog`](crate::messages::MessageLog).
//!
//! # Usage
//!
//! ```ignore
//! use heroes::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ServerStart, &[("addr", "127.0.0.1:54321")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
