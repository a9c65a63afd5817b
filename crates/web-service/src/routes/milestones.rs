//! 里程碑相关接口

use crate::models::common::Created;
use crate::models::err::AppError;
use crate::models::milestones::{MilestoneCreate, MilestoneInfo, MilestoneUpdate};
use crate::routes::path_id;
use crate::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 查询所有已发布的里程碑，最新的排在前面
#[utoipa::path(get,
    path = "/milestones",
    tag = "milestones",
    responses(
        (status = 200, description = "Published milestones, newest first", body = Vec<MilestoneInfo>)
    ),
)]
pub async fn list_milestones(State(state): State<AppState>) -> Result<Json<Vec<MilestoneInfo>>, AppError> {
    debug!("🔍 查询所有已发布的里程碑");

    let milestones = state.portfolio_service.list_published_milestones().await?;

    Ok(Json(milestones.into_iter().map(Into::into).collect()))
}

/// 查询指定里程碑
///
/// 未发布的里程碑与不存在的里程碑一样返回404
#[utoipa::path(get,
    path = "/milestones/{id}",
    tag = "milestones",
    params(("id" = i32, Path, description = "里程碑ID")),
    responses(
        (status = 200, description = "Published milestone", body = MilestoneInfo),
        (status = 400, description = "Invalid milestone ID: not an integer or outside the i32 range"),
        (status = 404, description = "Milestone not found")
    ),
)]
pub async fn get_milestone(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MilestoneInfo>, AppError> {
    let milestone_id = path_id(path, "Invalid milestone ID")?;
    debug!("Getting milestone id {:#?}", milestone_id);

    let milestone = state.portfolio_service.get_published_milestone(milestone_id).await?;

    Ok(Json(milestone.into()))
}

#[utoipa::path(post,
    path = "/admin/milestones",
    tag = "admin",
    request_body = MilestoneCreate,
    responses(
        (status = 201, description = "Create milestone result", body = Created)
    )
)]
pub async fn create_milestone(
    State(state): State<AppState>,
    Json(milestone): Json<MilestoneCreate>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    debug!("Creating milestone {:#?}", milestone);

    milestone.validate()?;

    let id = state.portfolio_service.create_milestone(milestone.into()).await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// 部分更新里程碑
#[utoipa::path(patch,
    path = "/admin/milestones/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "里程碑ID")),
    request_body = MilestoneUpdate,
    responses(
        (status = 204, description = "Milestone updated"),
        (status = 400, description = "No field provided"),
        (status = 404, description = "Milestone not found")
    )
)]
pub async fn update_milestone(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Json(info): Json<MilestoneUpdate>,
) -> Result<StatusCode, AppError> {
    let milestone_id = path_id(path, "Invalid milestone ID")?;
    debug!("Updating milestone {} with {:#?}", milestone_id, info);

    info.validate()?;
    state.portfolio_service.update_milestone(milestone_id, info.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete,
    path = "/admin/milestones/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "里程碑ID")),
    responses(
        (status = 204, description = "Milestone deleted"),
        (status = 404, description = "Milestone not found")
    )
)]
pub async fn delete_milestone(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let milestone_id = path_id(path, "Invalid milestone ID")?;
    debug!("delete milestone {:#?}", milestone_id);

    state.portfolio_service.delete_milestone(milestone_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
