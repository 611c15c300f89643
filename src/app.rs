//! Composition root
//!
//! Builds one [`MessageLog`] and one [`HeroGateway`] and hands them to
//! every view it creates.

use std::sync::Arc;
use std::time::Duration;

use crate::backend::BackendServer;
use crate::config::Config;
use crate::gateway::{HeroGateway, HttpTransport, RouterTransport, Transport, TransportError};
use crate::messages::MessageLog;
use crate::views::{Dashboard, HeroDetail, HeroSearch, Roster, DEFAULT_DEBOUNCE};

pub struct App {
    messages: MessageLog,
    gateway: Arc<HeroGateway>,
    search_debounce: Duration,
}

impl App {
    pub fn new(transport: impl Transport + 'static) -> Self {
        let messages = MessageLog::new();
        let gateway = Arc::new(HeroGateway::new(transport, messages.clone()));
        Self {
            messages,
            gateway,
            search_debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// App talking to the backend at `client.base_url`
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.client.base_url, config.client.timeout())?;
        Ok(Self::new(transport).with_search_debounce(config.search.debounce()))
    }

    /// App wired to an in-process backend
    pub fn in_process(server: &BackendServer) -> Self {
        Self::new(RouterTransport::for_server(server))
    }

    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn gateway(&self) -> Arc<HeroGateway> {
        self.gateway.clone()
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.gateway.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.gateway.clone())
    }

    pub fn detail(&self) -> HeroDetail {
        HeroDetail::new(self.gateway.clone())
    }

    pub fn search(&self) -> HeroSearch {
        HeroSearch::with_debounce(self.gateway.clone(), self.search_debounce)
    }
}
