//! View State Tests
//!
//! Roster, dashboard and detail views built by the composition root:
//! - deletes are applied to the local list before the backend answers
//! - adds are applied only after the backend assigns an id
//! - blank names never leave the view

use std::time::Duration;

use heroes::app::App;
use heroes::backend::{BackendConfig, BackendServer, HeroStore};
use heroes::gateway::{Ack, ErrorKind};
use heroes::hero::{Hero, HeroError};

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_app() -> (BackendServer, App) {
    let server = BackendServer::new();
    let app = App::in_process(&server);
    (server, app)
}

fn slow_app(latency: Duration) -> (BackendServer, App) {
    let mut config = BackendConfig::default();
    config.latency_ms = latency.as_millis() as u64;
    let server = BackendServer::with_store(config, HeroStore::seeded());
    let app = App::in_process(&server);
    (server, app)
}

// =============================================================================
// Roster
// =============================================================================

#[tokio::test]
async fn test_roster_load() {
    let (_server, app) = seeded_app();
    let mut roster = app.roster();

    roster.load().await;

    assert_eq!(roster.heroes().len(), 10);
    assert!(roster.last_error().is_none());
}

/// The hero disappears locally before the delete request completes.
#[tokio::test(start_paused = true)]
async fn test_roster_delete_is_optimistic() {
    let (server, app) = slow_app(Duration::from_millis(500));
    let mut roster = app.roster();
    roster.load().await;
    let bombasto = roster.heroes()[2].clone();

    let pending = roster.delete(&bombasto);

    assert!(!roster.contains(bombasto.id));
    assert!(server.state().store.get(bombasto.id).is_ok());

    let outcome = pending.await;
    assert_eq!(outcome.into_result(), Ok(Ack));
    assert!(server.state().store.get(bombasto.id).is_err());
}

/// A failed delete still leaves the local list without the hero.
#[tokio::test]
async fn test_roster_delete_failure_keeps_local_removal() {
    let (server, app) = seeded_app();
    let mut roster = app.roster();
    roster.load().await;
    let narco = roster.heroes()[1].clone();
    server.state().store.delete(narco.id).unwrap();

    let outcome = roster.delete(&narco).await;

    assert_eq!(outcome.error_kind(), Some(ErrorKind::NotFound));
    assert!(!roster.contains(narco.id));
}

#[tokio::test]
async fn test_roster_add_appends_created_hero() {
    let (_server, app) = seeded_app();
    let mut roster = app.roster();
    roster.load().await;

    let created = roster.add("  Cid  ").await;

    assert_eq!(created, Some(Hero::new(21, "Cid")));
    assert_eq!(roster.heroes().last(), Some(&Hero::new(21, "Cid")));
}

#[tokio::test]
async fn test_roster_add_blank_sends_nothing() {
    let (_server, app) = seeded_app();
    let mut roster = app.roster();

    assert_eq!(roster.add("   ").await, None);
    assert_eq!(app.gateway().requests_sent(), 0);
    assert!(app.messages().is_empty());
}

#[tokio::test]
async fn test_roster_selection_cleared_on_delete() {
    let (_server, app) = seeded_app();
    let mut roster = app.roster();
    roster.load().await;
    let magma = roster.heroes()[8].clone();

    roster.select(&magma);
    assert_eq!(roster.selected(), Some(&magma));

    let _ = roster.delete(&magma).await;
    assert_eq!(roster.selected(), None);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_top_heroes() {
    let (_server, app) = seeded_app();
    let mut dashboard = app.dashboard();

    dashboard.load().await;

    let ids: Vec<_> = dashboard.top_heroes().iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![12, 13, 14, 15]);
}

#[tokio::test]
async fn test_dashboard_with_few_heroes() {
    let store = HeroStore::with_heroes(vec![Hero::new(1, "Windstorm"), Hero::new(2, "Bombasto")]);
    let server = BackendServer::with_store(BackendConfig::default(), store);
    let app = App::in_process(&server);
    let mut dashboard = app.dashboard();

    dashboard.load().await;

    assert_eq!(dashboard.top_heroes(), &[Hero::new(2, "Bombasto")]);
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn test_detail_load_rename_save() {
    let (server, app) = seeded_app();
    let mut detail = app.detail();

    detail.load(16).await;
    assert_eq!(detail.hero(), Some(&Hero::new(16, "RubberMan")));

    detail.rename("Elastic Man").unwrap();
    let saved = detail.save().await;

    assert!(saved.is_success());
    assert_eq!(server.state().store.get(16).unwrap().name, "Elastic Man");
    assert_eq!(
        app.messages().messages(),
        vec![
            "HeroService: fetched hero id=16",
            "HeroService: updated hero id=16"
        ]
    );
}

#[tokio::test]
async fn test_detail_missing_hero() {
    let (_server, app) = seeded_app();
    let mut detail = app.detail();

    detail.load(404).await;

    assert_eq!(detail.hero(), None);
    assert_eq!(detail.last_error().map(|e| e.kind()), Some(ErrorKind::NotFound));

    let saved = detail.save().await;
    assert_eq!(saved.error_kind(), Some(ErrorKind::Validation));
    assert_eq!(app.gateway().requests_sent(), 1);
}

#[tokio::test]
async fn test_detail_rejects_blank_rename() {
    let (_server, app) = seeded_app();
    let mut detail = app.detail();
    detail.load(17).await;

    assert!(detail.rename("  ").is_err());
    assert_eq!(detail.hero().map(|h| h.name.as_str()), Some("Dynama"));
}

#[tokio::test]
async fn test_detail_rename_before_load_fails() {
    let (_server, app) = seeded_app();
    let mut detail = app.detail();

    assert_eq!(detail.rename("Nobody"), Err(HeroError::NotLoaded));
    assert_eq!(detail.hero(), None);
    assert_eq!(app.gateway().requests_sent(), 0);
}
