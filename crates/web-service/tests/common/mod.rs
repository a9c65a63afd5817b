//! 测试公共工具
//!
//! 提供内存版的 [`PortfolioRepositoryTrait`] 实现，以及构建路由、发送请求的辅助函数

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::Utc;
use database::{
    DatabaseError, DatabaseResult, Milestone, MilestoneCreate, MilestoneUpdate, PartialUpdate,
    PortfolioRepositoryTrait, Project, ProjectCreate, ProjectUpdate, PUBLISHED_STATUS,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

#[derive(Default)]
struct Store {
    next_project_id: i32,
    next_milestone_id: i32,
    projects: BTreeMap<i32, Project>,
    milestones: BTreeMap<i32, Milestone>,
}

/// 内存版作品集仓库
///
/// 行为与 PostgreSQL 实现保持一致：id 从 1 开始自增、删除项目级联删除里程碑、
/// 空的部分更新返回 InvalidArgument、按 id 未命中返回 NotFound。
#[derive(Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for InMemoryRepository {
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        let store = self.store.read().await;
        Ok(store.projects.values().cloned().collect())
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Project> {
        let store = self.store.read().await;
        let mut project = store
            .projects
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found("project", id))?;

        project.milestones = store
            .milestones
            .values()
            .filter(|m| m.project_id == id)
            .cloned()
            .collect();
        project.milestones.sort_by_key(|m| m.milestone_date);

        Ok(project)
    }

    async fn get_milestone_by_id(&self, id: i32) -> DatabaseResult<Milestone> {
        let store = self.store.read().await;
        store
            .milestones
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found("milestone", id))
    }

    async fn get_all_published_milestones(&self) -> DatabaseResult<Vec<Milestone>> {
        let store = self.store.read().await;
        let mut milestones: Vec<Milestone> = store
            .milestones
            .values()
            .filter(|m| m.status == PUBLISHED_STATUS)
            .cloned()
            .collect();
        milestones.sort_by(|a, b| b.milestone_date.cmp(&a.milestone_date));
        Ok(milestones)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i32> {
        let mut store = self.store.write().await;
        store.next_project_id += 1;
        let id = store.next_project_id;

        store.projects.insert(
            id,
            Project {
                id,
                name: project.name,
                description: project.description,
                created_at: Utc::now(),
                milestones: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn create_milestone(&self, milestone: MilestoneCreate) -> DatabaseResult<i32> {
        let mut store = self.store.write().await;
        if !store.projects.contains_key(&milestone.project_id) {
            return Err(DatabaseError::SqlxError(sqlx::Error::Protocol(
                "violates foreign key constraint milestones_project_id_fkey".to_string(),
            )));
        }

        store.next_milestone_id += 1;
        let id = store.next_milestone_id;

        store.milestones.insert(
            id,
            Milestone {
                id,
                title: milestone.title,
                milestone_date: milestone.milestone_date,
                description: milestone.description,
                body_url: milestone.body_url,
                github_url: milestone.github_url,
                image_url: milestone.image_url,
                milestone_type: milestone.milestone_type,
                status: milestone.status,
                project_id: milestone.project_id,
                tags: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<()> {
        if update.is_empty() {
            return Err(DatabaseError::invalid_argument("no fields to update for project"));
        }

        let mut store = self.store.write().await;
        let project = store
            .projects
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found("project", id))?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        Ok(())
    }

    async fn update_milestone(&self, id: i32, update: MilestoneUpdate) -> DatabaseResult<()> {
        if update.is_empty() {
            return Err(DatabaseError::invalid_argument("no fields to update for milestone"));
        }

        let mut store = self.store.write().await;
        let milestone = store
            .milestones
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found("milestone", id))?;

        if let Some(title) = update.title {
            milestone.title = title;
        }
        if let Some(date) = update.milestone_date {
            milestone.milestone_date = date;
        }
        if let Some(description) = update.description {
            milestone.description = description;
        }
        if let Some(body_url) = update.body_url {
            milestone.body_url = body_url;
        }
        if let Some(github_url) = update.github_url {
            milestone.github_url = github_url;
        }
        if let Some(image_url) = update.image_url {
            milestone.image_url = image_url;
        }
        if let Some(milestone_type) = update.milestone_type {
            milestone.milestone_type = milestone_type;
        }
        if let Some(status) = update.status {
            milestone.status = status;
        }
        if let Some(project_id) = update.project_id {
            milestone.project_id = project_id;
        }
        Ok(())
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<()> {
        let mut store = self.store.write().await;
        store
            .projects
            .remove(&id)
            .ok_or_else(|| DatabaseError::not_found("project", id))?;

        // 模拟外键的 ON DELETE CASCADE
        store.milestones.retain(|_, m| m.project_id != id);
        Ok(())
    }

    async fn delete_milestone(&self, id: i32) -> DatabaseResult<()> {
        let mut store = self.store.write().await;
        store
            .milestones
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::not_found("milestone", id))
    }
}

/// 使用给定仓库构建完整的应用路由
pub fn build_test_app(repository: InMemoryRepository, admin_routes_enabled: bool) -> Router {
    create_app_router(AppState::new(repository), admin_routes_enabled)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
