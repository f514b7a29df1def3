use utoipa::OpenApi;
use crate::handlers::registry::{ExtensionJson, VersionListJson};

/// OpenAPI文档配置
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::registry::get_latest_extension,
        crate::handlers::registry::get_extension_version,
        crate::handlers::registry::list_extension_versions,
    ),
    components(schemas(ExtensionJson, VersionListJson)),
    tags(
        (name = "extensions", description = "扩展版本查询端点"),
    ),
    info(
        title = "Vsx API",
        description = "扩展注册表只读查询接口",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
