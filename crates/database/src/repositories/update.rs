//! 部分更新语句构建
//!
//! 每个可更新的实体都通过 [`PartialUpdate`] 显式声明"字段 -> 列"的映射表，
//! 映射顺序固定，只有设置了值的字段才会写入 UPDATE 语句。

use crate::models::{MilestoneUpdate, ProjectUpdate};
use crate::{DatabaseError, DatabaseResult};
use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder};

/// 待写入某一列的值
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    /// 可为空的文本列，`None` 写入 NULL
    NullableText(Option<String>),
    Timestamp(DateTime<Utc>),
    Integer(i32),
}

/// 支持部分更新的实体
pub trait PartialUpdate {
    /// 表名
    const TABLE: &'static str;

    /// 实体名称，用于错误信息
    const ENTITY: &'static str;

    /// 按声明顺序返回所有已设置的 `(列名, 值)`
    fn set_columns(&self) -> Vec<(&'static str, ColumnValue)>;

    /// 是否没有设置任何字段
    fn is_empty(&self) -> bool {
        self.set_columns().is_empty()
    }
}

fn collect_set(fields: Vec<(&'static str, Option<ColumnValue>)>) -> Vec<(&'static str, ColumnValue)> {
    fields
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
}

impl PartialUpdate for ProjectUpdate {
    const TABLE: &'static str = "projects";
    const ENTITY: &'static str = "project";

    fn set_columns(&self) -> Vec<(&'static str, ColumnValue)> {
        collect_set(vec![
            ("name", self.name.clone().map(ColumnValue::Text)),
            ("description", self.description.clone().map(ColumnValue::Text)),
        ])
    }
}

impl PartialUpdate for MilestoneUpdate {
    const TABLE: &'static str = "milestones";
    const ENTITY: &'static str = "milestone";

    fn set_columns(&self) -> Vec<(&'static str, ColumnValue)> {
        collect_set(vec![
            ("title", self.title.clone().map(ColumnValue::Text)),
            ("milestone_date", self.milestone_date.map(ColumnValue::Timestamp)),
            ("description", self.description.clone().map(ColumnValue::Text)),
            ("body_url", self.body_url.clone().map(ColumnValue::NullableText)),
            ("github_url", self.github_url.clone().map(ColumnValue::NullableText)),
            ("image_url", self.image_url.clone().map(ColumnValue::NullableText)),
            (
                "milestone_type",
                self.milestone_type.as_ref().map(|t| ColumnValue::Text(t.to_string())),
            ),
            ("status", self.status.clone().map(ColumnValue::Text)),
            ("project_id", self.project_id.map(ColumnValue::Integer)),
        ])
    }
}

/// 构建 `UPDATE <table> SET col = $1, ... WHERE id = $n`
///
/// 没有设置任何字段时返回 [`DatabaseError::InvalidArgument`]，不会生成语句
pub(crate) fn build_update_query<U: PartialUpdate>(id: i32, update: &U) -> DatabaseResult<QueryBuilder<'static, Postgres>> {
    if update.is_empty() {
        return Err(DatabaseError::invalid_argument(format!(
            "no fields to update for {}",
            U::ENTITY
        )));
    }

    let columns = update.set_columns();

    let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", U::TABLE));
    {
        let mut assignments = builder.separated(", ");
        for (column, value) in columns {
            assignments.push(format!("{column} = "));
            match value {
                ColumnValue::Text(v) => {
                    assignments.push_bind_unseparated(v);
                }
                ColumnValue::NullableText(v) => {
                    assignments.push_bind_unseparated(v);
                }
                ColumnValue::Timestamp(v) => {
                    assignments.push_bind_unseparated(v);
                }
                ColumnValue::Integer(v) => {
                    assignments.push_bind_unseparated(v);
                }
            }
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    Ok(builder)
}
