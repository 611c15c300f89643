//! Hero gateway
//!
//! Sole mediator between presentation state and the hero backend. Every
//! operation issues at most one request and always resolves to an
//! [`Outcome`]:
//!
//! - success: a `HeroService: ...` line is appended to the message log
//! - failure: the error goes to the diagnostic log, a
//!   `HeroService: <operation> failed: <reason>` line goes to the message
//!   log, and the operation's fallback value is returned with the error
//!
//! Nothing is retried and concurrent calls are not ordered relative to
//! each other.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::hero::{Hero, HeroId, HeroRef, NewHero};
use crate::messages::MessageLog;
use crate::observability::{log_event_with_fields, Event};

use super::errors::GatewayError;
use super::outcome::{Ack, Outcome};
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Prefix of every message-log line written by the gateway
pub const MESSAGE_SOURCE: &str = "HeroService";

const HEROES_PATH: &str = "heroes";

/// Gateway operation, used for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListHeroes,
    GetHero(HeroId),
    SearchHeroes,
    AddHero,
    UpdateHero,
    DeleteHero,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListHeroes => write!(f, "get heroes"),
            Operation::GetHero(id) => write!(f, "get hero id={}", id),
            Operation::SearchHeroes => write!(f, "search heroes"),
            Operation::AddHero => write!(f, "add hero"),
            Operation::UpdateHero => write!(f, "update hero"),
            Operation::DeleteHero => write!(f, "delete hero"),
        }
    }
}

/// CRUD and search access to the hero backend
pub struct HeroGateway {
    transport: Arc<dyn Transport>,
    messages: MessageLog,
    requests_sent: AtomicU64,
}

impl HeroGateway {
    pub fn new(transport: impl Transport + 'static, messages: MessageLog) -> Self {
        Self::with_shared_transport(Arc::new(transport), messages)
    }

    pub fn with_shared_transport(transport: Arc<dyn Transport>, messages: MessageLog) -> Self {
        Self {
            transport,
            messages,
            requests_sent: AtomicU64::new(0),
        }
    }

    /// Message log this gateway writes to
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Number of requests handed to the transport so far
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.load(Ordering::Relaxed)
    }

    /// `GET /heroes`; falls back to an empty list
    pub async fn list_all(&self) -> Outcome<Vec<Hero>> {
        let result = self.fetch::<Vec<Hero>>(ApiRequest::get(HEROES_PATH)).await;
        self.settle(Operation::ListHeroes, result, Vec::new(), |_| {
            "fetched heroes".to_string()
        })
    }

    /// `GET /heroes/<id>`; falls back to `None`, including on 404
    pub async fn get_by_id(&self, id: HeroId) -> Outcome<Option<Hero>> {
        let result = self
            .fetch::<Hero>(ApiRequest::get(hero_path(id)))
            .await
            .map(Some);
        self.settle(Operation::GetHero(id), result, None, |_| {
            format!("fetched hero id={}", id)
        })
    }

    /// `GET /heroes?name=<term>`; a blank term returns an empty list
    /// without touching the backend
    pub async fn search(&self, term: &str) -> Outcome<Vec<Hero>> {
        if term.trim().is_empty() {
            return Outcome::success(Vec::new());
        }

        let request = ApiRequest::get(HEROES_PATH).with_query("name", term);
        let result = self.fetch::<Vec<Hero>>(request).await;
        self.settle(Operation::SearchHeroes, result, Vec::new(), |_| {
            format!("found heroes matching \"{}\"", term)
        })
    }

    /// `POST /heroes`; returns the stored hero with its assigned id,
    /// falls back to `None`
    pub async fn create(&self, hero: &NewHero) -> Outcome<Option<Hero>> {
        let request = ApiRequest::post(HEROES_PATH, json!({ "name": hero.name() }));
        let result = self.fetch::<Hero>(request).await.map(Some);
        self.settle(Operation::AddHero, result, None, |created| match created {
            Some(created) => format!("added hero w/ id={}", created.id),
            None => "added hero".to_string(),
        })
    }

    /// `PUT /heroes` with the whole record
    pub async fn update(&self, hero: &Hero) -> Outcome<Ack> {
        let request = ApiRequest::put(HEROES_PATH, json!({ "id": hero.id, "name": hero.name }));
        let result = self.exchange(request).await.map(|_| Ack);
        self.settle(Operation::UpdateHero, result, Ack, |_| {
            format!("updated hero id={}", hero.id)
        })
    }

    /// `DELETE /heroes/<id>`; accepts an id or a record
    pub async fn remove(&self, hero: impl Into<HeroRef>) -> Outcome<Ack> {
        let id = hero.into().id();
        let result = self
            .exchange(ApiRequest::delete(hero_path(id)))
            .await
            .map(|_| Ack);
        self.settle(Operation::DeleteHero, result, Ack, |_| {
            format!("deleted hero id={}", id)
        })
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            return Err(GatewayError::from_response(&response));
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, GatewayError> {
        let response = self.exchange(request).await?;
        serde_json::from_slice(&response.body).map_err(GatewayError::decode)
    }

    fn settle<T>(
        &self,
        operation: Operation,
        result: Result<T, GatewayError>,
        fallback: T,
        describe: impl FnOnce(&T) -> String,
    ) -> Outcome<T> {
        match result {
            Ok(value) => {
                let op = operation.to_string();
                log_event_with_fields(Event::GatewayRequestOk, &[("operation", op.as_str())]);
                self.log(&describe(&value));
                Outcome::success(value)
            }
            Err(err) => {
                let op = operation.to_string();
                let status = err.status().map(|s| s.to_string()).unwrap_or_default();
                log_event_with_fields(
                    Event::GatewayRequestFailed,
                    &[
                        ("error", err.message()),
                        ("kind", err.kind().as_str()),
                        ("operation", op.as_str()),
                        ("status", status.as_str()),
                    ],
                );
                self.log(&format!("{} failed: {}", op, err));
                Outcome::failure(fallback, err)
            }
        }
    }

    fn log(&self, message: &str) {
        self.messages
            .append(format!("{}: {}", MESSAGE_SOURCE, message));
    }
}

fn hero_path(id: HeroId) -> String {
    format!("{}/{}", HEROES_PATH, id)
}
