//! Dashboard: a handful of featured heroes

use std::sync::Arc;

use crate::gateway::{GatewayError, HeroGateway};
use crate::hero::Hero;

/// Positions in the full list shown as top heroes (second through fifth)
const TOP_HEROES: std::ops::Range<usize> = 1..5;

pub struct Dashboard {
    gateway: Arc<HeroGateway>,
    top_heroes: Vec<Hero>,
    last_error: Option<GatewayError>,
}

impl Dashboard {
    pub fn new(gateway: Arc<HeroGateway>) -> Self {
        Self {
            gateway,
            top_heroes: Vec::new(),
            last_error: None,
        }
    }

    pub async fn load(&mut self) {
        let (heroes, error) = self.gateway.list_all().await.into_parts();
        let end = TOP_HEROES.end.min(heroes.len());
        let start = TOP_HEROES.start.min(end);
        self.top_heroes = heroes[start..end].to_vec();
        self.last_error = error;
    }

    pub fn top_heroes(&self) -> &[Hero] {
        &self.top_heroes
    }

    pub fn last_error(&self) -> Option<&GatewayError> {
        self.last_error.as_ref()
    }
}
