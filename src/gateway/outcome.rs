//! Gateway call outcome
//!
//! An [`Outcome`] always holds a usable value: the real one on success or
//! the operation's fallback (empty list, `None`, [`Ack`]) on failure. The
//! failure itself stays inspectable instead of being swallowed.

use super::errors::{ErrorKind, GatewayError};

/// Content-free completion signal returned by write operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ack;

/// Value plus optional classified failure
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    value: T,
    error: Option<GatewayError>,
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn failure(fallback: T, error: GatewayError) -> Self {
        Self {
            value: fallback,
            error: Some(error),
        }
    }

    /// The value, or the fallback if the call failed
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(GatewayError::kind)
    }

    /// Drop the fallback and surface the failure as `Err`
    pub fn into_result(self) -> Result<T, GatewayError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    pub fn into_parts(self) -> (T, Option<GatewayError>) {
        (self.value, self.error)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            error: self.error,
        }
    }
}
