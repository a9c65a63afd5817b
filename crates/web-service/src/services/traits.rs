//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use database::{DatabaseResult, Milestone, MilestoneCreate, MilestoneUpdate, Project, ProjectCreate, ProjectUpdate};

/// 作品集服务 trait 定义
///
/// 定义了项目/里程碑相关的业务逻辑接口，作为应用层的端口(Port)。
/// 公开接口只能看到已发布（`status == "published"`）的里程碑；管理接口直接透传到仓库层。
///
/// 该 trait 是对象安全的，路由层通过 `Arc<dyn PortfolioServiceTrait>` 使用，具体实现由 [`PortfolioService`](super::PortfolioService) 提供
#[async_trait::async_trait]
pub trait PortfolioServiceTrait: Send + Sync + 'static {
    /// 获取所有项目（不包含里程碑）
    async fn list_projects(&self) -> DatabaseResult<Vec<Project>>;

    /// 获取项目详情，只保留已发布的里程碑
    async fn get_published_project(&self, id: i32) -> DatabaseResult<Project>;

    /// 获取已发布的里程碑，未发布时视为不存在
    async fn get_published_milestone(&self, id: i32) -> DatabaseResult<Milestone>;

    /// 获取所有已发布的里程碑，按日期降序
    async fn list_published_milestones(&self) -> DatabaseResult<Vec<Milestone>>;

    /// 创建项目，返回新项目 ID
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i32>;

    /// 创建里程碑，返回新里程碑 ID
    async fn create_milestone(&self, milestone: MilestoneCreate) -> DatabaseResult<i32>;

    /// 部分更新项目
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<()>;

    /// 部分更新里程碑
    async fn update_milestone(&self, id: i32, update: MilestoneUpdate) -> DatabaseResult<()>;

    /// 删除项目（级联删除里程碑）
    async fn delete_project(&self, id: i32) -> DatabaseResult<()>;

    /// 删除里程碑
    async fn delete_milestone(&self, id: i32) -> DatabaseResult<()>;
}
