use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// DatabaseManager 管理注册表数据库连接池
#[derive(Clone)]
pub struct DatabaseManager {
    primary: Arc<DatabaseConnection>,
}

impl DatabaseManager {
    /// 创建新的DatabaseManager
    pub async fn new(
        url: &str,
        max_connections: u32,
        min_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_string());
        options
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(connect_timeout)
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!(backend = ?db.get_database_backend(), "Database connection established");

        Ok(Self {
            primary: Arc::new(db),
        })
    }

    /// 由已有连接创建（测试中使用）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            primary: Arc::new(db),
        }
    }

    /// 获取主数据库连接
    pub fn primary_db(&self) -> Arc<DatabaseConnection> {
        self.primary.clone()
    }
}
