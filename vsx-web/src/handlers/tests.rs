//! 注册表端点测试
//!
//! 通过内存SQLite走完整的 handler → service → lookup 链路。

use crate::{registry_routes, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use vsx_infra::SeaOrmVersionLookup;
use vsx_migration::{Migrator, MigratorTrait};
use vsx_service::DefaultVersionService;

const SEED: &[&str] = &[
    "INSERT INTO namespace (id, name) VALUES (1, 'bar')",
    "INSERT INTO extension (id, name, namespace_id) VALUES (1, 'foo', 1)",
    "INSERT INTO extension (id, name, namespace_id) VALUES (2, 'empty', 1)",
    "INSERT INTO extension_version (id, version, extension_id, display_name) VALUES (1, '1.0.0', 1, 'Foo')",
    "INSERT INTO extension_version (id, version, extension_id, display_name) VALUES (2, '2.0.0', 1, 'Foo Two')",
];

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    for sql in SEED {
        db.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await
            .unwrap();
    }

    let lookup = Arc::new(SeaOrmVersionLookup::new(Arc::new(db)));
    let state = AppState::new(Arc::new(DefaultVersionService::new(lookup)));
    registry_routes().with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_get_latest_extension() {
    let (status, body) = get(app().await, "/api/bar/foo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "2.0.0");
    assert_eq!(body["displayName"], "Foo Two");
    assert_eq!(body["namespace"], "bar");
    assert_eq!(body["allVersions"], serde_json::json!(["2.0.0", "1.0.0"]));
}

#[tokio::test]
async fn test_get_extension_version_ignores_name_case() {
    let (status, body) = get(app().await, "/api/BAR/Foo/1.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["name"], "foo");
}

#[tokio::test]
async fn test_get_extension_version_not_found() {
    let (status, _) = get(app().await, "/api/bar/foo/3.0.0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app().await, "/api/bar/missing/1.0.0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_latest_of_extension_without_versions_is_not_found() {
    let (status, _) = get(app().await, "/api/bar/empty").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_extension_versions() {
    let (status, body) = get(app().await, "/api/bar/foo/versions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["versions"], serde_json::json!(["2.0.0", "1.0.0"]));

    let (status, body) = get(app().await, "/api/bar/empty/versions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["versions"], serde_json::json!([]));

    let (status, _) = get(app().await, "/api/bar/missing/versions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_extension_versions_returns_stored_names() {
    let (status, body) = get(app().await, "/api/BAR/FOO/versions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["namespace"], "bar");
    assert_eq!(body["name"], "foo");
}

#[tokio::test]
async fn test_get_extension_version_omits_missing_fields() {
    let (status, body) = get(app().await, "/api/bar/foo/2.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "Foo Two");
    assert!(body.get("description").is_none());
}
