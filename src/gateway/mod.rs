//! # Hero Gateway
//!
//! Turns CRUD intents into backend requests with uniform logging and
//! fault tolerance. Failures never escape as `Err`; they ride along on the
//! returned [`Outcome`] next to a fallback value.

pub mod errors;
pub mod outcome;
pub mod service;
pub mod transport;

pub use errors::{ErrorKind, GatewayError};
pub use outcome::{Ack, Outcome};
pub use service::{HeroGateway, Operation, MESSAGE_SOURCE};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, RouterTransport, Transport, TransportError,
};
