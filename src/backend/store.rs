//! In-memory hero store
//!
//! Keeps heroes in insertion order. Ids are generated as one past the
//! highest stored id, starting at 11 for an empty store.

use std::sync::RwLock;

use crate::hero::{normalize_name, Hero, HeroId, NewHero};

use super::errors::{ApiError, ApiResult};

/// First id handed out by an empty store
pub const FIRST_ID: HeroId = 11;

/// Heroes every fresh backend starts with
pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Mr. Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero::new(id, name))
    .collect()
}

/// Thread-safe hero collection
#[derive(Debug, Default)]
pub struct HeroStore {
    heroes: RwLock<Vec<Hero>>,
}

impl HeroStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default seed heroes
    pub fn seeded() -> Self {
        Self::with_heroes(seed_heroes())
    }

    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: RwLock::new(heroes),
        }
    }

    /// All heroes, optionally filtered by case-insensitive name substring
    pub fn list(&self, name_filter: Option<&str>) -> Vec<Hero> {
        let heroes = self.heroes.read().unwrap_or_else(|e| e.into_inner());
        match name_filter.map(str::to_lowercase) {
            Some(needle) => heroes
                .iter()
                .filter(|h| h.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
            None => heroes.clone(),
        }
    }

    pub fn get(&self, id: HeroId) -> ApiResult<Hero> {
        let heroes = self.heroes.read().unwrap_or_else(|e| e.into_inner());
        heroes
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    /// Store a new hero under a freshly generated id
    pub fn insert(&self, hero: NewHero) -> ApiResult<Hero> {
        let mut heroes = self.heroes.write().unwrap_or_else(|e| e.into_inner());
        let id = Self::next_id(&heroes)?;
        let created = Hero::new(id, hero.name());
        heroes.push(created.clone());
        Ok(created)
    }

    /// Replace the name of an existing hero
    pub fn update(&self, hero: Hero) -> ApiResult<()> {
        let name = normalize_name(&hero.name)?;
        let mut heroes = self.heroes.write().unwrap_or_else(|e| e.into_inner());
        let slot = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or(ApiError::NotFound(hero.id))?;
        slot.name = name;
        Ok(())
    }

    pub fn delete(&self, id: HeroId) -> ApiResult<()> {
        let mut heroes = self.heroes.write().unwrap_or_else(|e| e.into_inner());
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or(ApiError::NotFound(id))?;
        heroes.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.heroes.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(heroes: &[Hero]) -> ApiResult<HeroId> {
        match heroes.iter().map(|h| h.id).max() {
            None => Ok(FIRST_ID),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ApiError::Internal("hero id space exhausted".to_string())),
        }
    }
}
