//! 项目相关接口
//!

use crate::models::common::Created;
use crate::models::err::AppError;
use crate::models::projects::{ProjectCreate, ProjectDetail, ProjectInfo, ProjectUpdate};
use crate::routes::path_id;
use crate::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 查询所有项目
///
/// 列表中不包含里程碑，按项目 ID 升序排列。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectInfo>)
    ),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectInfo>>, AppError> {
    debug!("🔍 查询所有项目");

    let projects = state.portfolio_service.list_projects().await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// 查询指定项目信息
///
/// 返回的里程碑只包含已发布的部分，按日期升序排列。
///
/// 路径中的 `id` 不是整数或超出 i32 范围时返回400，项目不存在时返回404。
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project with published milestones", body = ProjectDetail),
        (status = 400, description = "Invalid project ID: not an integer or outside the i32 range"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProjectDetail>, AppError> {
    let project_id = path_id(path, "Invalid project ID")?;
    debug!("Getting project id {:#?}", project_id);

    let project = state.portfolio_service.get_published_project(project_id).await?;

    Ok(Json(project.into()))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，返回新项目的 ID
#[utoipa::path(post,
    path = "/admin/projects",
    tag = "admin",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Create project result", body = Created)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(project): Json<ProjectCreate>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    debug!("Creating project {:#?}", project);

    // 验证输入参数，确保有效性
    project.validate()?;

    let id = state.portfolio_service.create_project(project.into()).await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// 更新项目信息
///
/// 根据用户指定的 `id` 和 修改信息 [`ProjectUpdate`] 来更新项目信息，只修改提供了的字段。
#[utoipa::path(patch,
    path = "/admin/projects/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "项目ID")),
    request_body = ProjectUpdate,
    responses(
        (status = 204, description = "Project updated"),
        (status = 400, description = "No field provided"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Json(info): Json<ProjectUpdate>,
) -> Result<StatusCode, AppError> {
    let project_id = path_id(path, "Invalid project ID")?;
    debug!("Updating project {} with {:#?}", project_id, info);

    info.validate()?;
    state.portfolio_service.update_project(project_id, info.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 删除指定的项目
///
/// 项目下的所有里程碑会被一并删除
#[utoipa::path(delete,
    path = "/admin/projects/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let project_id = path_id(path, "Invalid project ID")?;
    debug!("delete project {:#?}", project_id);

    state.portfolio_service.delete_project(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
