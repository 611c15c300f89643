//! Hero model errors

use thiserror::Error;

/// Result type for hero model operations
pub type HeroResult<T> = Result<T, HeroError>;

/// Validation failures for hero records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroError {
    /// Name is empty or whitespace-only
    #[error("Hero name must not be blank")]
    BlankName,

    /// Edit attempted before any hero was loaded
    #[error("No hero loaded")]
    NotLoaded,
}
