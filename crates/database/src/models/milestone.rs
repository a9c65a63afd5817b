//! 里程碑数据库模型

use chrono::{DateTime, Utc};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 公开可见的里程碑状态
///
/// 状态在数据库中是自由文本，只有完全等于该值的里程碑才会对外展示
pub const PUBLISHED_STATUS: &str = "published";

/// 里程碑类型
///
/// 数据库中以 TEXT 存储。读取时不会因为无法识别的值而失败，
/// 未知文本原样保存在 [`MilestoneType::Other`] 中并在写回时保持不变
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MilestoneType {
    /// 大型项目
    ProjectMajor,
    /// 小型项目
    ProjectMinor,
    Education,
    Career,
    /// 无法识别的类型
    Other(String),
}

impl MilestoneType {
    /// 数据库中存储的文本值
    pub fn as_str(&self) -> &str {
        match self {
            MilestoneType::ProjectMajor => "project_major",
            MilestoneType::ProjectMinor => "project_minor",
            MilestoneType::Education => "education",
            MilestoneType::Career => "career",
            MilestoneType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MilestoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MilestoneType {
    fn from(s: &str) -> Self {
        match s {
            "project_major" | "major-project" => MilestoneType::ProjectMajor,
            "project_minor" | "minor-project" => MilestoneType::ProjectMinor,
            "education" => MilestoneType::Education,
            "career" => MilestoneType::Career,
            other => MilestoneType::Other(other.to_string()),
        }
    }
}

impl FromStr for MilestoneType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// 里程碑信息结构体
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: i32,
    pub title: String,
    pub milestone_date: DateTime<Utc>,
    pub description: String,
    pub body_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub milestone_type: MilestoneType,
    pub status: String,
    pub project_id: i32,

    /// 标签目前没有持久化，从数据库读取时始终为空
    pub tags: Vec<String>,
}

impl Milestone {
    /// 是否对外公开
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED_STATUS
    }
}

/// 里程碑创建参数
#[derive(Debug, Clone)]
pub struct MilestoneCreate {
    pub title: String,
    pub milestone_date: DateTime<Utc>,
    pub description: String,
    pub body_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub milestone_type: MilestoneType,
    pub status: String,
    pub project_id: i32,
}

/// 里程碑更新参数
///
/// 可为空的链接字段使用 `Option<Option<String>>`：
/// - `None`: 不修改
/// - `Some(None)`: 置为 NULL
/// - `Some(Some(url))`: 写入新值
#[derive(Debug, Clone, Default)]
pub struct MilestoneUpdate {
    pub title: Option<String>,
    pub milestone_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub body_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub milestone_type: Option<MilestoneType>,
    pub status: Option<String>,
    pub project_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_type_text_mapping() {
        for ty in [
            MilestoneType::ProjectMajor,
            MilestoneType::ProjectMinor,
            MilestoneType::Education,
            MilestoneType::Career,
        ] {
            assert_eq!(MilestoneType::from(ty.as_str()), ty);
        }
    }

    #[test]
    fn test_hyphenated_project_types_are_accepted() {
        assert_eq!(MilestoneType::from("major-project"), MilestoneType::ProjectMajor);
        assert_eq!(MilestoneType::from("minor-project"), MilestoneType::ProjectMinor);
    }

    #[test]
    fn test_unknown_milestone_type_keeps_text() {
        let ty: MilestoneType = "hobby".parse().unwrap();

        assert_eq!(ty, MilestoneType::Other("hobby".to_string()));
        assert_eq!(ty.as_str(), "hobby");
    }
}
