use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::initialize_database;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 默认输出本项目的debug日志，可通过 RUST_LOG 覆盖
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_backend=debug,database=debug,web_service=debug".into()),
        )
        .init();

    let config = AppConfig::load()
        .inspect_err(|e| error!("❌ 加载配置失败: {e}"))
        .wrap_err("Failed to load configuration")?;
    info!("⚙️ 配置加载完成: {:?}", config);

    let pool = initialize_database(config.clone())
        .await
        .inspect_err(|e| error!("❌ 初始化数据库失败: {e}"))
        .wrap_err("Failed initial database setup")?;

    // Ctrl-C 时通知 Web 服务优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("📴 收到退出信号");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                // 发送端必须保持存活，否则 Web 服务会立即退出
                error!("❌ 无法监听退出信号: {e}");
                std::future::pending::<()>().await;
            }
        }
    });

    web_service::start_web_service(pool.clone(), config, shutdown_rx)
        .await
        .inspect_err(|e| error!("❌ Web Service 异常退出: {e}"))?;

    pool.close().await;
    info!("👋 服务已退出");

    Ok(())
}
