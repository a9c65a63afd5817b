use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 里程碑类型
///
/// 创建和修改时只接受这几个取值
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    ProjectMajor,
    ProjectMinor,
    Education,
    Career,
}

impl From<MilestoneType> for database::MilestoneType {
    fn from(ty: MilestoneType) -> Self {
        match ty {
            MilestoneType::ProjectMajor => database::MilestoneType::ProjectMajor,
            MilestoneType::ProjectMinor => database::MilestoneType::ProjectMinor,
            MilestoneType::Education => database::MilestoneType::Education,
            MilestoneType::Career => database::MilestoneType::Career,
        }
    }
}

/// 里程碑信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct MilestoneInfo {
    #[schema(example = 7)]
    pub id: i32,

    #[schema(example = "First release")]
    pub title: String,

    pub milestone_date: DateTime<Utc>,

    pub description: String,

    /// 详细内容链接
    pub body_url: Option<String>,

    /// 代码仓库链接
    pub github_url: Option<String>,

    /// 配图链接
    pub image_url: Option<String>,

    /// 里程碑类型，数据库中无法识别的类型按原文本返回
    #[schema(example = "project_major")]
    pub milestone_type: String,

    #[schema(example = "published")]
    pub status: String,

    pub project_id: i32,

    /// 标签（暂未持久化，始终为空）
    pub tags: Vec<String>,
}

impl From<database::Milestone> for MilestoneInfo {
    fn from(m: database::Milestone) -> Self {
        MilestoneInfo {
            id: m.id,
            title: m.title,
            milestone_date: m.milestone_date,
            description: m.description,
            body_url: m.body_url,
            github_url: m.github_url,
            image_url: m.image_url,
            milestone_type: m.milestone_type.to_string(),
            status: m.status,
            project_id: m.project_id,
            tags: m.tags,
        }
    }
}

/// 新建里程碑参数
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct MilestoneCreate {
    #[schema(example = "First release")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub milestone_date: DateTime<Utc>,

    #[serde(default)]
    pub description: String,

    #[validate(url)]
    pub body_url: Option<String>,

    #[validate(url)]
    pub github_url: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub milestone_type: MilestoneType,

    #[schema(example = "draft")]
    #[validate(length(min = 1))]
    pub status: String,

    pub project_id: i32,
}

impl From<MilestoneCreate> for database::MilestoneCreate {
    fn from(m: MilestoneCreate) -> Self {
        database::MilestoneCreate {
            title: m.title,
            milestone_date: m.milestone_date,
            description: m.description,
            body_url: m.body_url,
            github_url: m.github_url,
            image_url: m.image_url,
            milestone_type: m.milestone_type.into(),
            status: m.status,
            project_id: m.project_id,
        }
    }
}

/// 区分"未提供"与"显式为 null"
///
/// 配合 `#[serde(default)]` 使用：字段缺失为 `None`，`null` 为 `Some(None)`
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// 修改里程碑参数
///
/// 未提供的字段保持不变；链接字段传 `null` 表示清空
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct MilestoneUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub milestone_date: Option<DateTime<Utc>>,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(url)]
    pub body_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(url)]
    pub github_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(url)]
    pub image_url: Option<Option<String>>,

    pub milestone_type: Option<MilestoneType>,

    #[schema(example = "published")]
    #[validate(length(min = 1))]
    pub status: Option<String>,

    pub project_id: Option<i32>,
}

impl From<MilestoneUpdate> for database::MilestoneUpdate {
    fn from(m: MilestoneUpdate) -> Self {
        database::MilestoneUpdate {
            title: m.title,
            milestone_date: m.milestone_date,
            description: m.description,
            body_url: m.body_url,
            github_url: m.github_url,
            image_url: m.image_url,
            milestone_type: m.milestone_type.map(Into::into),
            status: m.status,
            project_id: m.project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_update(json: &str) -> MilestoneUpdate {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_url_is_unset() {
        let update = parse_update(r#"{"status": "published"}"#);

        assert_eq!(update.body_url, None);
        assert_eq!(update.status.as_deref(), Some("published"));
    }

    #[test]
    fn test_null_url_clears_column() {
        let update = parse_update(r#"{"github_url": null}"#);

        assert_eq!(update.github_url, Some(None));
    }

    #[test]
    fn test_url_value_is_set() {
        let update = parse_update(r#"{"image_url": "https://example.com/a.png"}"#);

        assert_eq!(update.image_url, Some(Some("https://example.com/a.png".to_string())));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let update = parse_update(r#"{"body_url": "not a url"}"#);

        assert!(update.validate().is_err());
    }

    #[test]
    fn test_milestone_type_wire_format() {
        let ty: MilestoneType = serde_json::from_str(r#""project_major""#).unwrap();
        assert_eq!(ty, MilestoneType::ProjectMajor);
        assert_eq!(serde_json::to_string(&MilestoneType::Career).unwrap(), r#""career""#);
    }

    #[test]
    fn test_unrecognized_stored_type_is_returned_verbatim() {
        let milestone = database::Milestone {
            id: 1,
            title: "Talk".to_string(),
            milestone_date: DateTime::<Utc>::default(),
            description: String::new(),
            body_url: None,
            github_url: None,
            image_url: None,
            milestone_type: database::MilestoneType::Other("conference".to_string()),
            status: "published".to_string(),
            project_id: 1,
            tags: Vec::new(),
        };

        let info = MilestoneInfo::from(milestone);
        assert_eq!(info.milestone_type, "conference");
    }
}
