//! Gateway transports
//!
//! A [`Transport`] turns one [`ApiRequest`] into one [`ApiResponse`]. Paths
//! are relative to the API root (`heroes`, `heroes/11`).
//!
//! - [`RouterTransport`] dispatches in-process into an axum router
//! - [`HttpTransport`] talks to a remote backend through reqwest

use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tower::ServiceExt;

use crate::backend::BackendServer;

/// Base URL used to build in-process request URIs
const IN_PROCESS_ORIGIN: &str = "http://in-process.invalid";

/// Failures below the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request could not be delivered or its response not read
    #[error("Network error: {0}")]
    Network(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// One request to the hero backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Absolute URL under `base` with the query string encoded
    pub fn url(&self, base: &str) -> Result<Url, TransportError> {
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", joined, e)))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Status and raw body of a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Carries gateway requests to a backend
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and wait for its response
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

// ==================
// In-process transport
// ==================

/// Dispatches requests directly into an axum router, without a socket
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
    base: String,
}

impl RouterTransport {
    /// `api_root` is the path the hero routes are mounted under
    pub fn new(router: Router, api_root: &str) -> Self {
        Self {
            router,
            base: format!("{}{}", IN_PROCESS_ORIGIN, api_root.trim_end_matches('/')),
        }
    }

    pub fn for_server(server: &BackendServer) -> Self {
        Self::new(server.router(), &server.config().api_root)
    }
}

#[async_trait]
impl Transport for RouterTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url(&self.base)?;
        let uri = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let mut builder = Request::builder().method(request.method.clone()).uri(uri);
        let body = match &request.body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let http_request = builder
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = match self.router.clone().oneshot(http_request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

// ==================
// HTTP transport
// ==================

/// Sends requests to a remote backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` includes the API root, e.g. `http://127.0.0.1:54321/api`.
    /// Without a timeout a hung request waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        Url::parse(base_url)
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url(&self.base_url)?;
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = self.client.request(method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Network(format!("request timed out: {}", e))
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| TransportError::Network(format!("invalid status: {}", e)))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(format!("read response body: {}", e)))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
