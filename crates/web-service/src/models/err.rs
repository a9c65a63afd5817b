use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求参数错误，例如路径中的 id 不是整数
    #[error("{0}")]
    InvalidArgument(String),

    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// Tell axum how to convert `AppError` into a response.
///
/// 5xx 错误只在服务端日志中记录详细信息，返回给客户端的是通用提示。
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound { entity, id } => {
                    (StatusCode::NOT_FOUND, format!("Resource not found: {entity} {id}")).into_response()
                }
                DatabaseError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, format!("Invalid argument: {msg}")).into_response(),
                err => {
                    error!("❌ 请求处理失败: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidArgument("Invalid project ID".into()), StatusCode::BAD_REQUEST),
            (DatabaseError::not_found("project", 1).into(), StatusCode::NOT_FOUND),
            (DatabaseError::invalid_argument("empty").into(), StatusCode::BAD_REQUEST),
            (DatabaseError::connection("refused").into(), StatusCode::INTERNAL_SERVER_ERROR),
            (DatabaseError::decode("bad row").into(), StatusCode::INTERNAL_SERVER_ERROR),
            (DatabaseError::SqlxError(sqlx::Error::RowNotFound).into(), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
