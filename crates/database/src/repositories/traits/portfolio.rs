//! 作品集仓库 trait 定义
//!
//! 定义项目与里程碑两张表的数据库操作抽象接口

use crate::models::{Milestone, MilestoneCreate, MilestoneUpdate, Project, ProjectCreate, ProjectUpdate};
use crate::DatabaseResult;

/// 作品集仓库trait定义
///
/// 定义了项目/里程碑相关的数据库操作接口，支持：
/// - 项目列表（不含里程碑）与项目详情（含里程碑）
/// - 里程碑查询
/// - 创建、部分更新、删除
///
/// 按 id 操作时没有命中任何记录统一返回 [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)。
#[async_trait::async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync + 'static {
    /// 获取所有项目，按 id 升序，里程碑列表为空
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>>;

    /// 根据 ID 获取项目及其全部里程碑（按日期升序）
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Project>;

    /// 根据 ID 获取里程碑
    async fn get_milestone_by_id(&self, id: i32) -> DatabaseResult<Milestone>;

    /// 获取所有已发布的里程碑，按日期降序
    async fn get_all_published_milestones(&self) -> DatabaseResult<Vec<Milestone>>;

    /// 创建新项目
    ///
    /// # 返回值
    /// 返回数据库生成的项目 ID
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i32>;

    /// 创建新里程碑
    ///
    /// # 返回值
    /// 返回数据库生成的里程碑 ID
    async fn create_milestone(&self, milestone: MilestoneCreate) -> DatabaseResult<i32>;

    /// 部分更新项目，只写入设置了值的字段
    ///
    /// 没有设置任何字段时返回 [`DatabaseError::InvalidArgument`](crate::DatabaseError::InvalidArgument)
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<()>;

    /// 部分更新里程碑，只写入设置了值的字段
    async fn update_milestone(&self, id: i32, update: MilestoneUpdate) -> DatabaseResult<()>;

    /// 删除项目，其下的里程碑由数据库外键级联删除
    async fn delete_project(&self, id: i32) -> DatabaseResult<()>;

    /// 删除里程碑
    async fn delete_milestone(&self, id: i32) -> DatabaseResult<()>;
}
