use crate::models::milestones::MilestoneInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 项目列表中的项目信息（不包含里程碑）
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectInfo {
    #[schema(example = 1)]
    /// 项目ID
    pub id: i32,

    #[schema(example = "Homelab")]
    /// 项目名称
    pub name: String,

    /// 项目描述
    pub description: String,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<database::Project> for ProjectInfo {
    fn from(project: database::Project) -> Self {
        ProjectInfo {
            id: project.id,
            name: project.name,
            description: project.description,
            created_at: project.created_at,
        }
    }
}

/// 项目详情，包含已发布的里程碑
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectDetail {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Homelab")]
    pub name: String,

    pub description: String,

    pub created_at: DateTime<Utc>,

    /// 按日期升序排列的里程碑
    pub milestones: Vec<MilestoneInfo>,
}

impl From<database::Project> for ProjectDetail {
    fn from(project: database::Project) -> Self {
        ProjectDetail {
            id: project.id,
            name: project.name,
            description: project.description,
            created_at: project.created_at,
            milestones: project.milestones.into_iter().map(Into::into).collect(),
        }
    }
}

/// 新建项目参数
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectCreate {
    #[schema(example = "Homelab")]
    #[validate(length(min = 1, max = 200))]
    /// 新建项目名称
    pub name: String,

    #[serde(default)]
    /// 项目描述
    pub description: String,
}

impl From<ProjectCreate> for database::ProjectCreate {
    fn from(project: ProjectCreate) -> Self {
        database::ProjectCreate {
            name: project.name,
            description: project.description,
        }
    }
}

/// 修改项目参数
///
/// 未提供的字段保持不变，至少需要提供一个字段
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectUpdate {
    #[schema(example = "Homelab v2")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub description: Option<String>,
}

impl From<ProjectUpdate> for database::ProjectUpdate {
    fn from(update: ProjectUpdate) -> Self {
        database::ProjectUpdate {
            name: update.name,
            description: update.description,
        }
    }
}
