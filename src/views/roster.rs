//! Hero roster
//!
//! Local list of heroes backing the "all heroes" screen. Adds are applied
//! after the backend confirms; deletes are applied locally first.

use std::future::Future;
use std::sync::Arc;

use crate::gateway::{Ack, GatewayError, HeroGateway, Outcome};
use crate::hero::{Hero, HeroId, NewHero};

pub struct Roster {
    gateway: Arc<HeroGateway>,
    heroes: Vec<Hero>,
    selected: Option<HeroId>,
    last_error: Option<GatewayError>,
}

impl Roster {
    pub fn new(gateway: Arc<HeroGateway>) -> Self {
        Self {
            gateway,
            heroes: Vec::new(),
            selected: None,
            last_error: None,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.iter().any(|h| h.id == id)
    }

    /// Failure of the most recent load or add
    pub fn last_error(&self) -> Option<&GatewayError> {
        self.last_error.as_ref()
    }

    /// Replace the local list with the backend's
    pub async fn load(&mut self) {
        let (heroes, error) = self.gateway.list_all().await.into_parts();
        self.heroes = heroes;
        self.last_error = error;
    }

    /// Submit a new hero; blank names are ignored without a request
    pub async fn add(&mut self, name: &str) -> Option<Hero> {
        let hero = NewHero::new(name).ok()?;
        let (created, error) = self.gateway.create(&hero).await.into_parts();
        self.last_error = error;
        if let Some(created) = &created {
            self.heroes.push(created.clone());
        }
        created
    }

    /// Drop the hero from the local list now and return the pending
    /// backend delete
    pub fn delete(&mut self, hero: &Hero) -> impl Future<Output = Outcome<Ack>> + Send + 'static {
        let id = hero.id;
        self.heroes.retain(|h| h.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        let gateway = self.gateway.clone();
        async move { gateway.remove(id).await }
    }

    pub fn select(&mut self, hero: &Hero) {
        self.selected = Some(hero.id);
    }

    pub fn selected(&self) -> Option<&Hero> {
        let id = self.selected?;
        self.heroes.iter().find(|h| h.id == id)
    }
}
