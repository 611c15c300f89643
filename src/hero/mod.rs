//! Hero record model
//!
//! A hero is an `id` assigned by the backend plus a display `name`.
//! New heroes are submitted without an id through [`NewHero`], which can
//! only be built from a non-blank name.

mod errors;

pub use errors::{HeroError, HeroResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned hero identifier
pub type HeroId = u32;

/// A stored hero record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replace the name, rejecting blank input
    pub fn rename(&mut self, name: &str) -> HeroResult<()> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    /// Whether the record is well formed (non-blank name)
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// A hero that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    name: String,
}

impl NewHero {
    /// Build a new hero from a trimmed, non-blank name
    pub fn new(name: &str) -> HeroResult<Self> {
        Ok(Self {
            name: normalize_name(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Addresses a hero either by id or by a record held by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRef(HeroId);

impl HeroRef {
    pub fn id(self) -> HeroId {
        self.0
    }
}

impl From<HeroId> for HeroRef {
    fn from(id: HeroId) -> Self {
        Self(id)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        Self(hero.id)
    }
}

/// Trim a name and reject it if nothing is left
pub fn normalize_name(name: &str) -> HeroResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(HeroError::BlankName);
    }
    Ok(trimmed.to_string())
}
