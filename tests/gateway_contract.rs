//! Gateway Contract Tests
//!
//! Every gateway operation:
//! - issues at most one request
//! - appends exactly one message-log line per request
//! - never raises; failures come back as a fallback value plus a
//!   classified error

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use heroes::backend::{BackendConfig, BackendServer, HeroStore};
use heroes::gateway::{
    Ack, ApiRequest, ApiResponse, ErrorKind, HeroGateway, RouterTransport, Transport,
    TransportError,
};
use heroes::hero::{Hero, HeroId, NewHero};
use heroes::messages::MessageLog;

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_gateway() -> (BackendServer, HeroGateway) {
    gateway_over(HeroStore::seeded())
}

fn gateway_over(store: HeroStore) -> (BackendServer, HeroGateway) {
    let server = BackendServer::with_store(BackendConfig::default(), store);
    let gateway = HeroGateway::new(RouterTransport::for_server(&server), MessageLog::new());
    (server, gateway)
}

/// Transport whose backend is unreachable
struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Network("connection refused".to_string()))
    }
}

fn unreachable_gateway() -> HeroGateway {
    HeroGateway::new(UnreachableTransport, MessageLog::new())
}

/// Gateway over a backend that answers every hero request with `status`
/// and `body`
fn canned_gateway(status: StatusCode, body: &'static str) -> HeroGateway {
    let handler = move || async move { (status, body) };
    let router = Router::new()
        .route("/api/heroes", get(handler).post(handler).put(handler))
        .route("/api/heroes/:id", get(handler).delete(handler));
    HeroGateway::new(RouterTransport::new(router, "/api"), MessageLog::new())
}

// =============================================================================
// Scenarios
// =============================================================================

/// Listing a one-hero backend yields that hero and one log line.
#[tokio::test]
async fn test_list_all_single_hero() {
    let (_server, gateway) = gateway_over(HeroStore::with_heroes(vec![Hero::new(1, "Windstorm")]));

    let heroes = gateway.list_all().await;

    assert!(heroes.is_success());
    assert_eq!(heroes.into_value(), vec![Hero::new(1, "Windstorm")]);
    assert_eq!(gateway.messages().messages(), vec!["HeroService: fetched heroes"]);
}

/// Every listed hero is well formed.
#[tokio::test]
async fn test_list_all_records_are_well_formed() {
    let (_server, gateway) = seeded_gateway();

    for hero in gateway.list_all().await.into_value() {
        assert!(hero.is_valid(), "blank name for id {}", hero.id);
    }
}

/// Creating "Cid" against the seeded backend gets id 21.
#[tokio::test]
async fn test_create_assigns_id() {
    let (_server, gateway) = seeded_gateway();

    let created = gateway.create(&NewHero::new("Cid").unwrap()).await;

    assert_eq!(created.into_value(), Some(Hero::new(21, "Cid")));
    let last = gateway.messages().last().unwrap();
    assert!(last.contains("21"), "{}", last);
    assert_eq!(last, "HeroService: added hero w/ id=21");
}

/// Created heroes keep the submitted name.
#[tokio::test]
async fn test_create_keeps_name() {
    let (_server, gateway) = gateway_over(HeroStore::new());

    let created = gateway.create(&NewHero::new("X").unwrap()).await.into_value();

    let created = created.expect("hero should be created");
    assert_eq!(created.name, "X");
    assert_eq!(created.id, 11);
}

/// Search finds heroes by case-insensitive substring.
#[tokio::test]
async fn test_search_matches_substring() {
    let (_server, gateway) = seeded_gateway();

    let found = gateway.search("mag").await.into_value();

    let names: Vec<_> = found.into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Magneta", "Magma"]);
    assert_eq!(
        gateway.messages().last().as_deref(),
        Some("HeroService: found heroes matching \"mag\"")
    );
}

/// Blank search terms never reach the backend.
#[tokio::test]
async fn test_blank_search_costs_nothing() {
    let gateway = unreachable_gateway();

    let empty = gateway.search("").await;
    let spaces = gateway.search("   ").await;

    assert!(empty.is_success() && empty.value().is_empty());
    assert!(spaces.is_success() && spaces.value().is_empty());
    assert_eq!(gateway.requests_sent(), 0);
    assert!(gateway.messages().is_empty());
}

/// Updating the same record twice acknowledges twice.
#[tokio::test]
async fn test_update_twice_is_idempotent() {
    let (server, gateway) = seeded_gateway();
    let hero = Hero::new(14, "Celeritas Prime");

    let first = gateway.update(&hero).await;
    let second = gateway.update(&hero).await;

    assert_eq!(first.into_result(), Ok(Ack));
    assert_eq!(second.into_result(), Ok(Ack));
    assert_eq!(
        gateway.messages().messages(),
        vec![
            "HeroService: updated hero id=14",
            "HeroService: updated hero id=14"
        ]
    );
    assert_eq!(server.state().store.get(14).unwrap().name, "Celeritas Prime");
}

/// Removing by record and by id both delete on the backend.
#[tokio::test]
async fn test_remove_by_record_or_id() {
    let (server, gateway) = seeded_gateway();
    let magma = Hero::new(19, "Magma");
    let tornado: HeroId = 20;

    assert!(gateway.remove(&magma).await.is_success());
    assert!(gateway.remove(tornado).await.is_success());

    assert_eq!(server.state().store.len(), 8);
    assert_eq!(
        gateway.messages().messages(),
        vec![
            "HeroService: deleted hero id=19",
            "HeroService: deleted hero id=20"
        ]
    );
}

// =============================================================================
// Failure Handling
// =============================================================================

/// A missing hero resolves to None with exactly one log line.
#[tokio::test]
async fn test_get_missing_hero_resolves_absent() {
    let (_server, gateway) = seeded_gateway();

    let hero = gateway.get_by_id(99).await;

    assert_eq!(*hero.value(), None);
    assert_eq!(hero.error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(gateway.messages().len(), 1);
    assert_eq!(
        gateway.messages().last().as_deref(),
        Some("HeroService: get hero id=99 failed: HTTP 404 Not Found: Hero 99 not found")
    );
}

/// An unreachable backend resolves every operation to its fallback.
#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let gateway = unreachable_gateway();
    let hero = Hero::new(11, "Mr. Nice");

    let listed = gateway.list_all().await;
    let fetched = gateway.get_by_id(11).await;
    let found = gateway.search("nice").await;
    let created = gateway.create(&NewHero::new("Cid").unwrap()).await;
    let updated = gateway.update(&hero).await;
    let removed = gateway.remove(&hero).await;

    assert!(listed.value().is_empty());
    assert_eq!(*fetched.value(), None);
    assert!(found.value().is_empty());
    assert_eq!(*created.value(), None);
    assert_eq!(*updated.value(), Ack);
    assert_eq!(*removed.value(), Ack);

    for kind in [
        listed.error_kind(),
        fetched.error_kind(),
        found.error_kind(),
        created.error_kind(),
        updated.error_kind(),
        removed.error_kind(),
    ] {
        assert_eq!(kind, Some(ErrorKind::Network));
    }

    assert_eq!(gateway.requests_sent(), 6);
    assert_eq!(gateway.messages().len(), 6);
    assert!(gateway
        .messages()
        .messages()
        .iter()
        .all(|m| m.contains("failed: Network error: connection refused")));
}

/// A failed update still acknowledges, but the failure is visible.
#[tokio::test]
async fn test_failed_update_is_inspectable() {
    let (_server, gateway) = seeded_gateway();

    let outcome = gateway.update(&Hero::new(99, "Ghost")).await;

    assert_eq!(*outcome.value(), Ack);
    assert!(outcome.is_failure());
    assert_eq!(outcome.error().unwrap().status(), Some(404));
}

/// 5xx responses are classified as server errors.
#[tokio::test]
async fn test_server_error_kind() {
    let gateway = canned_gateway(StatusCode::INTERNAL_SERVER_ERROR, "db on fire");

    let heroes = gateway.list_all().await;

    assert!(heroes.value().is_empty());
    assert_eq!(heroes.error_kind(), Some(ErrorKind::Server));
    assert_eq!(
        gateway.messages().last().as_deref(),
        Some("HeroService: get heroes failed: HTTP 500 Internal Server Error: db on fire")
    );
}

/// Non-JSON bodies are classified as decode errors.
#[tokio::test]
async fn test_decode_error_kind() {
    let gateway = canned_gateway(StatusCode::OK, "<html>not json</html>");

    let hero = gateway.get_by_id(11).await;

    assert_eq!(*hero.value(), None);
    assert_eq!(hero.error_kind(), Some(ErrorKind::Decode));
}

/// Acknowledged writes ignore the response body.
#[tokio::test]
async fn test_ack_ignores_body() {
    let gateway = canned_gateway(StatusCode::OK, "<html>whatever</html>");

    let removed = gateway.remove(11u32).await;

    assert!(removed.is_success());
}

/// Blank names rejected by the backend are validation errors.
#[tokio::test]
async fn test_backend_validation_kind() {
    let (_server, gateway) = seeded_gateway();

    let outcome = gateway.update(&Hero::new(11, "   ")).await;

    assert_eq!(outcome.error_kind(), Some(ErrorKind::Validation));
}
