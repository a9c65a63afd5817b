//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use crate::models::milestone::Milestone;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// 项目信息结构体
///
/// `milestones` 永远不是"未加载"的含义：空列表表示该项目没有里程碑。
/// 只有列表查询 [`get_all_projects`](crate::PortfolioRepositoryTrait::get_all_projects) 会刻意不加载里程碑。
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub milestones: Vec<Milestone>,
}

impl Project {
    /// 按出现次数降序返回项目下所有里程碑的标签
    ///
    /// 同一个里程碑里重复出现的标签会重复计数；次数相同的标签之间顺序不固定。
    pub fn ranked_tags(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in self.milestones.iter().flat_map(|m| m.tags.iter()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked.into_iter().map(|(tag, _)| tag.to_string()).collect()
    }
}

/// 项目创建参数
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub description: String,
}

/// 项目更新参数
///
/// 为 `None` 的字段不会出现在 UPDATE 语句中
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
