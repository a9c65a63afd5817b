//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::models::err::AppError;
use crate::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod milestones;
pub mod projects;

/// 解析路径中的整数 id，失败时返回带有 `message` 的400错误
///
/// 超出 `i32` 范围的 id 同样视为格式错误，返回400而不是404
pub(crate) fn path_id(path: Result<Path<i32>, PathRejection>, message: &str) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::InvalidArgument(message.to_string()))
}

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
/// - admin_routes_enabled: 是否挂载 `/admin` 下的创建/修改/删除接口
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，需要拆开定义
fn routers(state: AppState, admin_routes_enabled: bool) -> OpenApiRouter {
    let router = OpenApiRouter::new()
        .routes(routes!(projects::list_projects))
        .routes(routes!(projects::get_project))
        .routes(routes!(milestones::list_milestones))
        .routes(routes!(milestones::get_milestone));

    let router = if admin_routes_enabled {
        router
            .routes(routes!(projects::create_project))
            .routes(routes!(projects::update_project, projects::delete_project))
            .routes(routes!(milestones::create_milestone))
            .routes(routes!(milestones::update_milestone, milestones::delete_milestone))
    } else {
        router
    };

    router.with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由，统一挂载在 `/api` 下
/// - 使用Scalar作为最终在线文档格式，访问地址 `/docs`
/// - 记录每个请求的访问日志
pub fn create_app_router(shared_state: AppState, admin_routes_enabled: bool) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "作品集项目"),
            (name = "milestones", description = "已发布的里程碑"),
            (name = "admin", description = "管理接口，仅在 ADMIN_ROUTES_ENABLED=true 时挂载")
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state, admin_routes_enabled))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}
