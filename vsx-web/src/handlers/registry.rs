use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use vsx_service::{ExtensionDetail, ExtensionVersions, ServiceError};
use crate::AppState;

/// 扩展版本响应
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionJson {
    pub namespace: String,
    pub name: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// 从新到旧
    pub all_versions: Vec<String>,
}

impl From<ExtensionDetail> for ExtensionJson {
    fn from(detail: ExtensionDetail) -> Self {
        Self {
            namespace: detail.extension.namespace.name,
            name: detail.extension.name,
            version: detail.version.version,
            display_name: detail.version.display_name,
            description: detail.version.description,
            timestamp: detail.version.timestamp,
            all_versions: detail.all_versions,
        }
    }
}

/// 版本列表响应
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionListJson {
    pub namespace: String,
    pub name: String,
    pub versions: Vec<String>,
}

impl From<ExtensionVersions> for VersionListJson {
    fn from(listed: ExtensionVersions) -> Self {
        Self {
            namespace: listed.extension.namespace.name,
            name: listed.extension.name,
            versions: listed.versions.into_iter().map(|v| v.version).collect(),
        }
    }
}

/// 注册表只读路由
pub fn registry_routes() -> Router<AppState> {
    Router::new()
        .route("/api/:namespace/:extension", get(get_latest_extension))
        .route("/api/:namespace/:extension/versions", get(list_extension_versions))
        .route("/api/:namespace/:extension/:version", get(get_extension_version))
}

fn internal_error(err: ServiceError) -> StatusCode {
    error!(error = %err, "Registry lookup failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// 获取扩展最新版本
/// GET /api/{namespace}/{extension}
#[utoipa::path(
    get,
    path = "/api/{namespace}/{extension}",
    params(
        ("namespace" = String, Path, description = "命名空间名（不区分大小写）"),
        ("extension" = String, Path, description = "扩展名（不区分大小写）"),
    ),
    responses(
        (status = 200, description = "最新版本", body = ExtensionJson),
        (status = 404, description = "扩展不存在或没有版本"),
    ),
    tag = "extensions"
)]
pub async fn get_latest_extension(
    State(state): State<AppState>,
    Path((namespace, extension)): Path<(String, String)>,
) -> Result<Response, StatusCode> {
    match state.version_service.get_detail(&namespace, &extension, None).await {
        Ok(Some(detail)) => Ok(Json(ExtensionJson::from(detail)).into_response()),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// 获取扩展指定版本
/// GET /api/{namespace}/{extension}/{version}
#[utoipa::path(
    get,
    path = "/api/{namespace}/{extension}/{version}",
    params(
        ("namespace" = String, Path, description = "命名空间名（不区分大小写）"),
        ("extension" = String, Path, description = "扩展名（不区分大小写）"),
        ("version" = String, Path, description = "版本号（区分大小写）"),
    ),
    responses(
        (status = 200, description = "指定版本", body = ExtensionJson),
        (status = 404, description = "扩展或版本不存在"),
    ),
    tag = "extensions"
)]
pub async fn get_extension_version(
    State(state): State<AppState>,
    Path((namespace, extension, version)): Path<(String, String, String)>,
) -> Result<Response, StatusCode> {
    match state
        .version_service
        .get_detail(&namespace, &extension, Some(&version))
        .await
    {
        Ok(Some(detail)) => Ok(Json(ExtensionJson::from(detail)).into_response()),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// 列出扩展的所有版本
/// GET /api/{namespace}/{extension}/versions
#[utoipa::path(
    get,
    path = "/api/{namespace}/{extension}/versions",
    params(
        ("namespace" = String, Path, description = "命名空间名（不区分大小写）"),
        ("extension" = String, Path, description = "扩展名（不区分大小写）"),
    ),
    responses(
        (status = 200, description = "版本列表（从新到旧）", body = VersionListJson),
        (status = 404, description = "扩展不存在"),
    ),
    tag = "extensions"
)]
pub async fn list_extension_versions(
    State(state): State<AppState>,
    Path((namespace, extension)): Path<(String, String)>,
) -> Result<Response, StatusCode> {
    match state.version_service.list_versions(&namespace, &extension).await {
        Ok(Some(listed)) => Ok(Json(VersionListJson::from(listed)).into_response()),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}
