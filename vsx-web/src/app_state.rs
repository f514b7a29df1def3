use std::sync::Arc;
use vsx_service::VersionService;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub version_service: Arc<dyn VersionService>,
}

impl AppState {
    pub fn new(version_service: Arc<dyn VersionService>) -> Self {
        Self { version_service }
    }
}
