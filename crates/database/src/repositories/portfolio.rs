//! 作品集仓库
//!
//! 负责项目与里程碑相关的数据库操作

use crate::models::{Milestone, MilestoneCreate, MilestoneUpdate, Project, ProjectCreate, ProjectUpdate, PUBLISHED_STATUS};
use crate::repositories::rows::{group_project_rows, MilestoneRow, ProjectMilestoneRow, ProjectRow};
use crate::repositories::traits::PortfolioRepositoryTrait;
use crate::repositories::update::{build_update_query, PartialUpdate};
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

const GET_ALL_PROJECTS: &str = r#"
    SELECT id, name, description, created_at
    FROM projects
    ORDER BY id
"#;

const GET_PROJECT_WITH_MILESTONES: &str = r#"
    SELECT p.id          AS project_id,
           p.name        AS project_name,
           p.description AS project_description,
           p.created_at  AS project_created_at,
           m.id          AS milestone_id,
           m.title       AS milestone_title,
           m.milestone_date,
           m.description AS milestone_description,
           m.body_url,
           m.github_url,
           m.image_url,
           m.milestone_type,
           m.status
    FROM projects p
    LEFT JOIN milestones m ON p.id = m.project_id
    WHERE p.id = $1
    ORDER BY m.milestone_date
"#;

const GET_MILESTONE_BY_ID: &str = r#"
    SELECT id, title, milestone_date, description, body_url,
           github_url, image_url, milestone_type, status, project_id
    FROM milestones
    WHERE id = $1
"#;

const GET_MILESTONES_BY_STATUS: &str = r#"
    SELECT id, title, milestone_date, description, body_url,
           github_url, image_url, milestone_type, status, project_id
    FROM milestones
    WHERE status = $1
    ORDER BY milestone_date DESC
"#;

const CREATE_PROJECT: &str = r#"
    INSERT INTO projects (name, description)
    VALUES ($1, $2)
    RETURNING id
"#;

const CREATE_MILESTONE: &str = r#"
    INSERT INTO milestones (
        title, milestone_date, description, body_url,
        github_url, image_url, milestone_type, status, project_id
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING id
"#;

const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = $1";

const DELETE_MILESTONE: &str = "DELETE FROM milestones WHERE id = $1";

/// 作品集仓库结构体
///
/// 连接池由调用方注入，仓库本身不持有任何全局状态
#[derive(Debug, Clone)]
pub struct PortfolioRepository {
    pool: PgPool,
}

impl PortfolioRepository {
    /// 创建新的作品集仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 执行部分更新，影响行数为 0 时返回 [`DatabaseError::NotFound`]
    async fn apply_update<U: PartialUpdate + Sync>(&self, id: i32, update: &U) -> DatabaseResult<()> {
        let mut query = build_update_query(id, update)?;
        debug!("🔄 更新语句: {}", query.sql());

        let result = query.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(U::ENTITY, id));
        }

        Ok(())
    }

    /// 按 id 删除，影响行数为 0 时返回 [`DatabaseError::NotFound`]
    async fn delete_by_id(&self, statement: &'static str, entity: &'static str, id: i32) -> DatabaseResult<()> {
        let result = sqlx::query(statement).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(entity, id));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        debug!("🔍 获取所有项目");

        let rows = sqlx::query_as::<_, ProjectRow>(GET_ALL_PROJECTS)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 获取到 {} 个项目", rows.len());
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// 根据 ID 获取项目及其里程碑
    ///
    /// 使用一条 `LEFT JOIN` 查询：每个里程碑对应一行，项目没有里程碑时只有一行且里程碑列全为 NULL。
    /// 查询结果为空说明项目不存在。
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Project> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let rows = sqlx::query_as::<_, ProjectMilestoneRow>(GET_PROJECT_WITH_MILESTONES)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        let project = group_project_rows(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::not_found("project", id))?;

        debug!("✅ 项目 {} 共有 {} 个里程碑", id, project.milestones.len());
        Ok(project)
    }

    async fn get_milestone_by_id(&self, id: i32) -> DatabaseResult<Milestone> {
        debug!("🔍 根据 ID 获取里程碑: {}", id);

        let row = sqlx::query_as::<_, MilestoneRow>(GET_MILESTONE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("milestone", id))?;

        Ok(row.into())
    }

    async fn get_all_published_milestones(&self) -> DatabaseResult<Vec<Milestone>> {
        debug!("🔍 获取所有已发布的里程碑");

        let rows = sqlx::query_as::<_, MilestoneRow>(GET_MILESTONES_BY_STATUS)
            .bind(PUBLISHED_STATUS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i32> {
        debug!("📝 创建项目: {:#?}", project);

        let id = sqlx::query_scalar::<_, i32>(CREATE_PROJECT)
            .bind(project.name)
            .bind(project.description)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目创建成功: {}", id);
        Ok(id)
    }

    async fn create_milestone(&self, milestone: MilestoneCreate) -> DatabaseResult<i32> {
        debug!("📝 创建里程碑: {:#?}", milestone);

        let id = sqlx::query_scalar::<_, i32>(CREATE_MILESTONE)
            .bind(milestone.title)
            .bind(milestone.milestone_date)
            .bind(milestone.description)
            .bind(milestone.body_url)
            .bind(milestone.github_url)
            .bind(milestone.image_url)
            .bind(milestone.milestone_type.to_string())
            .bind(milestone.status)
            .bind(milestone.project_id)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 里程碑创建成功: {}", id);
        Ok(id)
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<()> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);
        self.apply_update(id, &update).await
    }

    async fn update_milestone(&self, id: i32, update: MilestoneUpdate) -> DatabaseResult<()> {
        debug!("🔄 更新里程碑 {} 信息: {:#?}", id, update);
        self.apply_update(id, &update).await
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<()> {
        debug!("🗑️ 删除项目: {}", id);
        self.delete_by_id(DELETE_PROJECT, "project", id).await
    }

    async fn delete_milestone(&self, id: i32) -> DatabaseResult<()> {
        debug!("🗑️ 删除里程碑: {}", id);
        self.delete_by_id(DELETE_MILESTONE, "milestone", id).await
    }
}
