//! Single-hero editor

use std::sync::Arc;

use crate::gateway::{Ack, ErrorKind, GatewayError, HeroGateway, Outcome};
use crate::hero::{Hero, HeroError, HeroId, HeroResult};

pub struct HeroDetail {
    gateway: Arc<HeroGateway>,
    hero: Option<Hero>,
    last_error: Option<GatewayError>,
}

impl HeroDetail {
    pub fn new(gateway: Arc<HeroGateway>) -> Self {
        Self {
            gateway,
            hero: None,
            last_error: None,
        }
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn last_error(&self) -> Option<&GatewayError> {
        self.last_error.as_ref()
    }

    pub async fn load(&mut self, id: HeroId) {
        let (hero, error) = self.gateway.get_by_id(id).await.into_parts();
        self.hero = hero;
        self.last_error = error;
    }

    /// Edit the local copy; nothing is sent until [`save`](Self::save).
    /// Fails with [`HeroError::NotLoaded`] if no hero is loaded.
    pub fn rename(&mut self, name: &str) -> HeroResult<()> {
        match self.hero.as_mut() {
            Some(hero) => hero.rename(name),
            None => Err(HeroError::NotLoaded),
        }
    }

    /// Send the local copy to the backend
    pub async fn save(&mut self) -> Outcome<Ack> {
        let outcome = match &self.hero {
            Some(hero) => self.gateway.update(hero).await,
            None => Outcome::failure(
                Ack,
                GatewayError::new(ErrorKind::Validation, "no hero loaded"),
            ),
        };
        self.last_error = outcome.error().cloned();
        outcome
    }
}
