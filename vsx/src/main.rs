mod config;
mod error;
mod server;

use axum::serve;
use crate::config::Config;
use error::Result;
use tokio::net::TcpListener;
use tracing::info;
use vsx_infra::{logging, DatabaseManager};
use vsx_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(&config.logging.level, config.logging.format)?;
    info!("Starting vsx registry...");
    info!("Configuration loaded successfully");

    // 初始化数据库连接
    let db_manager = DatabaseManager::new(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
        config.database.connect_timeout(),
    )
    .await?;

    if config.database.run_migrations {
        Migrator::up(&*db_manager.primary_db(), None).await?;
        info!("Database migrations applied");
    }

    // 初始化应用状态和路由
    let app_state = server::init_app_state(&db_manager);
    let app = server::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;
    info!("Server listening on {}", addr);

    serve(listener, app.into_make_service())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
