//! 查询结果行
//!
//! 数据库行结构体与领域模型之间的转换，以及联表结果的分组逻辑

use crate::models::{Milestone, MilestoneType, Project};
use crate::{DatabaseError, DatabaseResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// `projects` 表的一行
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProjectRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            milestones: Vec::new(),
        }
    }
}

/// `milestones` 表的一行
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct MilestoneRow {
    pub id: i32,
    pub title: String,
    pub milestone_date: DateTime<Utc>,
    pub description: String,
    pub body_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub milestone_type: String,
    pub status: String,
    pub project_id: i32,
}

impl From<MilestoneRow> for Milestone {
    fn from(row: MilestoneRow) -> Self {
        Milestone {
            id: row.id,
            title: row.title,
            milestone_date: row.milestone_date,
            description: row.description,
            body_url: row.body_url,
            github_url: row.github_url,
            image_url: row.image_url,
            milestone_type: MilestoneType::from(row.milestone_type.as_str()),
            status: row.status,
            project_id: row.project_id,
            tags: Vec::new(),
        }
    }
}

/// `projects LEFT JOIN milestones` 的一行
///
/// 项目没有里程碑时，里程碑相关的列全部为 NULL
#[derive(Debug, Default, sqlx::FromRow)]
pub(crate) struct ProjectMilestoneRow {
    pub project_id: i32,
    pub project_name: String,
    pub project_description: String,
    pub project_created_at: DateTime<Utc>,
    pub milestone_id: Option<i32>,
    pub milestone_title: Option<String>,
    pub milestone_date: Option<DateTime<Utc>>,
    pub milestone_description: Option<String>,
    pub body_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub milestone_type: Option<String>,
    pub status: Option<String>,
}

impl ProjectMilestoneRow {
    /// 拆分为项目（里程碑列表为空）和可选的里程碑
    fn into_parts(self) -> DatabaseResult<(Project, Option<Milestone>)> {
        let project = Project {
            id: self.project_id,
            name: self.project_name,
            description: self.project_description,
            created_at: self.project_created_at,
            milestones: Vec::new(),
        };

        let Some(milestone_id) = self.milestone_id else {
            return Ok((project, None));
        };

        let milestone = MilestoneRow {
            id: milestone_id,
            title: required(self.milestone_title, "milestone_title")?,
            milestone_date: required(self.milestone_date, "milestone_date")?,
            description: required(self.milestone_description, "milestone_description")?,
            body_url: self.body_url,
            github_url: self.github_url,
            image_url: self.image_url,
            milestone_type: required(self.milestone_type, "milestone_type")?,
            status: required(self.status, "status")?,
            project_id: project.id,
        }
        .into();

        Ok((project, Some(milestone)))
    }
}

fn required<T>(value: Option<T>, column: &str) -> DatabaseResult<T> {
    value.ok_or_else(|| DatabaseError::decode(format!("里程碑存在但列 {column} 为 NULL")))
}

/// 将联表查询的结果按项目分组
///
/// 按行的顺序处理：第一次遇到某个项目时创建项目并记录顺序，
/// 里程碑列不为空时追加到对应项目下。最终按项目首次出现的顺序返回，
/// 每个项目内的里程碑保持查询结果中的顺序。
pub(crate) fn group_project_rows(rows: Vec<ProjectMilestoneRow>) -> DatabaseResult<Vec<Project>> {
    let mut positions: HashMap<i32, usize> = HashMap::new();
    let mut projects: Vec<Project> = Vec::new();

    for row in rows {
        let (project, milestone) = row.into_parts()?;

        let position = *positions.entry(project.id).or_insert_with(|| {
            projects.push(project);
            projects.len() - 1
        });

        if let Some(milestone) = milestone {
            projects[position].milestones.push(milestone);
        }
    }

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project_only(project_id: i32) -> ProjectMilestoneRow {
        ProjectMilestoneRow {
            project_id,
            project_name: format!("project-{project_id}"),
            project_description: "desc".to_string(),
            project_created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn with_milestone(project_id: i32, milestone_id: i32, day: u32) -> ProjectMilestoneRow {
        ProjectMilestoneRow {
            milestone_id: Some(milestone_id),
            milestone_title: Some(format!("milestone-{milestone_id}")),
            milestone_date: Some(Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap()),
            milestone_description: Some(String::new()),
            github_url: Some("https://github.com/example/repo".to_string()),
            milestone_type: Some("career".to_string()),
            status: Some("published".to_string()),
            ..project_only(project_id)
        }
    }

    #[test]
    fn test_group_rows_into_single_project() {
        let rows = vec![with_milestone(1, 10, 1), with_milestone(1, 11, 2), with_milestone(1, 12, 3)];

        let projects = group_project_rows(rows).unwrap();

        assert_eq!(projects.len(), 1);
        let ids: Vec<i32> = projects[0].milestones.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let first = &projects[0].milestones[0];
        assert_eq!(first.project_id, 1);
        assert_eq!(first.milestone_type, MilestoneType::Career);
        assert_eq!(first.github_url.as_deref(), Some("https://github.com/example/repo"));
        assert_eq!(first.body_url, None);
        assert!(first.tags.is_empty());
    }

    #[test]
    fn test_project_without_milestones_has_empty_list() {
        let projects = group_project_rows(vec![project_only(7)]).unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 7);
        assert!(projects[0].milestones.is_empty());
    }

    #[test]
    fn test_projects_keep_first_seen_order() {
        let rows = vec![
            with_milestone(3, 30, 1),
            project_only(1),
            with_milestone(3, 31, 2),
            with_milestone(2, 20, 3),
        ];

        let projects = group_project_rows(rows).unwrap();

        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(projects[0].milestones.len(), 2);
        assert!(projects[1].milestones.is_empty());
        assert_eq!(projects[2].milestones.len(), 1);
    }

    #[test]
    fn test_no_rows_means_no_projects() {
        assert!(group_project_rows(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_milestone_type_does_not_fail_grouping() {
        let mut odd = with_milestone(1, 10, 1);
        odd.milestone_type = Some("hobby".to_string());
        let mut hyphenated = with_milestone(1, 11, 2);
        hyphenated.milestone_type = Some("major-project".to_string());

        let projects = group_project_rows(vec![odd, hyphenated]).unwrap();
        let types: Vec<&MilestoneType> = projects[0].milestones.iter().map(|m| &m.milestone_type).collect();
        assert_eq!(
            types,
            vec![&MilestoneType::Other("hobby".to_string()), &MilestoneType::ProjectMajor]
        );
    }

    #[test]
    fn test_missing_required_milestone_column_is_decode_error() {
        let mut row = with_milestone(1, 10, 1);
        row.milestone_title = None;

        let err = group_project_rows(vec![row]).unwrap_err();
        assert!(matches!(err, DatabaseError::DecodeError(_)));
    }
}
