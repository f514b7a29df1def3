use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use vsx_infra::{DatabaseManager, SeaOrmVersionLookup};
use vsx_service::{DefaultVersionService, VersionService};
use vsx_web::{openapi::ApiDoc, AppState};

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(vsx_web::registry_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// OpenAPI文档
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// 初始化应用状态
pub fn init_app_state(db_manager: &DatabaseManager) -> AppState {
    let lookup = Arc::new(SeaOrmVersionLookup::new(db_manager.primary_db()));
    let version_service: Arc<dyn VersionService> = Arc::new(DefaultVersionService::new(lookup));
    AppState::new(version_service)
}
