//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::{PortfolioRepository, PortfolioRepositoryTrait};
use shared_lib::AppConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::{PortfolioService, PortfolioServiceTrait};

/// 应用共享状态
///
/// 路由函数只依赖服务层的 trait object，测试时可以替换为任意仓库实现
#[derive(Clone)]
pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

impl AppState {
    /// 基于指定的仓库实现创建共享状态
    pub fn new<PR: PortfolioRepositoryTrait>(repository: PR) -> Self {
        Self {
            portfolio_service: Arc::new(PortfolioService::new(repository)),
        }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的通知（或发送端被丢弃）后停止接收新请求并优雅退出
pub async fn start_web_service(pool: Pool<Postgres>, config: Arc<AppConfig>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::new(PortfolioRepository::new(pool));

    let router = routes::create_app_router(shared_state, config.admin_routes_enabled);

    let bind_addr = config.bind_addr.as_str();
    info!("🚀 启动 Web Service 在 {}", bind_addr);
    if config.admin_routes_enabled {
        info!("🔧 管理接口已启用: /api/admin");
    }

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .wrap_err_with(|| format!("无法监听地址 {bind_addr}"))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
