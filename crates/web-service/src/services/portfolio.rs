//! 作品集服务
//!
//! 提供项目/里程碑相关的业务逻辑操作

use crate::services::traits::PortfolioServiceTrait;
use database::{
    DatabaseError, DatabaseResult, Milestone, MilestoneCreate, MilestoneUpdate, PortfolioRepositoryTrait, Project,
    ProjectCreate, ProjectUpdate,
};

#[derive(Debug, Clone)]
pub struct PortfolioService<PR: PortfolioRepositoryTrait> {
    repository: PR,
}

impl<PR: PortfolioRepositoryTrait> PortfolioService<PR> {
    pub fn new(repository: PR) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<PR: PortfolioRepositoryTrait> PortfolioServiceTrait for PortfolioService<PR> {
    async fn list_projects(&self) -> DatabaseResult<Vec<Project>> {
        self.repository.get_all_projects().await
    }

    async fn get_published_project(&self, id: i32) -> DatabaseResult<Project> {
        let mut project = self.repository.get_project_by_id(id).await?;
        project.milestones.retain(Milestone::is_published);
        Ok(project)
    }

    async fn get_published_milestone(&self, id: i32) -> DatabaseResult<Milestone> {
        let milestone = self.repository.get_milestone_by_id(id).await?;
        if !milestone.is_published() {
            return Err(DatabaseError::not_found("milestone", id));
        }
        Ok(milestone)
    }

    async fn list_published_milestones(&self) -> DatabaseResult<Vec<Milestone>> {
        self.repository.get_all_published_milestones().await
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i32> {
        self.repository.create_project(project).await
    }

    async fn create_milestone(&self, milestone: MilestoneCreate) -> DatabaseResult<i32> {
        self.repository.create_milestone(milestone).await
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<()> {
        self.repository.update_project(id, update).await
    }

    async fn update_milestone(&self, id: i32, update: MilestoneUpdate) -> DatabaseResult<()> {
        self.repository.update_milestone(id, update).await
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<()> {
        self.repository.delete_project(id).await
    }

    async fn delete_milestone(&self, id: i32) -> DatabaseResult<()> {
        self.repository.delete_milestone(id).await
    }
}
