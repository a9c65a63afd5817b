use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 根据配置生成连接参数
///
/// 部署环境中数据库与服务在同一内网，不启用 TLS
pub fn connect_options(config: &AppConfig) -> PgConnectOptions {
    let db = &config.database;
    PgConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(&db.password)
        .database(&db.name)
        .ssl_mode(PgSslMode::Disable)
}

/// 创建数据库连接池并验证连接可用
///
/// 表结构由外部维护，这里不执行迁移
pub async fn initialize_database(config: Arc<AppConfig>) -> DatabaseResult<DatabasePool> {
    // 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        // 1小时空闲则释放
        .idle_timeout(Duration::from_secs(3600))
        // 6小时强制释放，避免长时间链接导致数据库问题
        .max_lifetime(Duration::from_secs(3600 * 6))
        .test_before_acquire(true)
        .connect_with(connect_options(&config))
        .await
        .map_err(|e| DatabaseError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| DatabaseError::connection(format!("PostgreSQL数据库连通性检查失败: {e}")))?;

    info!(
        "🗄️ 数据库连接池创建成功: {}:{}/{}",
        config.database.host, config.database.port, config.database.name
    );

    Ok(pool)
}
