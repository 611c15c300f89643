//! Search-as-you-type
//!
//! Every keystroke takes a monotonically increasing tag. A keystroke is
//! dropped if a newer one arrives within the debounce interval, a term
//! equal to the previously searched one is skipped, and a response is
//! only applied if its tag is still the latest when it arrives.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::gateway::{GatewayError, HeroGateway};
use crate::hero::Hero;
use crate::observability::{log_event_with_fields, Event};

/// Default debounce interval between keystrokes
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What happened to one keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Results replaced; holds the number of matches
    Applied(usize),
    /// A newer keystroke arrived during the debounce interval
    Superseded,
    /// Same term as the previous search
    Unchanged,
    /// A newer keystroke arrived while the request was in flight
    Stale,
}

#[derive(Debug, Default)]
struct SearchState {
    last_term: Option<String>,
    results: Vec<Hero>,
    last_error: Option<GatewayError>,
}

pub struct HeroSearch {
    gateway: Arc<HeroGateway>,
    debounce: Duration,
    latest: AtomicU64,
    state: Mutex<SearchState>,
}

impl HeroSearch {
    pub fn new(gateway: Arc<HeroGateway>) -> Self {
        Self::with_debounce(gateway, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(gateway: Arc<HeroGateway>, debounce: Duration) -> Self {
        Self {
            gateway,
            debounce,
            latest: AtomicU64::new(0),
            state: Mutex::new(SearchState::default()),
        }
    }

    /// Handle one change of the search box
    pub async fn input(&self, term: &str) -> SearchUpdate {
        let tag = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if !self.is_latest(tag) {
            return SearchUpdate::Superseded;
        }

        {
            let mut state = self.lock();
            if state.last_term.as_deref() == Some(term) {
                return SearchUpdate::Unchanged;
            }
            state.last_term = Some(term.to_string());
        }

        let (results, error) = self.gateway.search(term).await.into_parts();

        if !self.is_latest(tag) {
            log_event_with_fields(
                Event::SearchResponseStale,
                &[("tag", tag.to_string().as_str()), ("term", term)],
            );
            return SearchUpdate::Stale;
        }

        let mut state = self.lock();
        let count = results.len();
        state.results = results;
        state.last_error = error;
        SearchUpdate::Applied(count)
    }

    /// Results of the latest applied search
    pub fn results(&self) -> Vec<Hero> {
        self.lock().results.clone()
    }

    pub fn last_error(&self) -> Option<GatewayError> {
        self.lock().last_error.clone()
    }

    fn is_latest(&self, tag: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == tag
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
