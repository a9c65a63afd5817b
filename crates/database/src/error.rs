use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误（语句执行失败）
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 行数据解析错误
    #[error("数据行解析错误: {0}")]
    DecodeError(String),

    /// 按 id 查询/修改/删除时没有命中任何记录
    #[error("未找到 {entity}: id={id}")]
    NotFound { entity: &'static str, id: i32 },

    /// 调用参数错误，例如没有设置任何字段的部分更新
    #[error("参数错误: {0}")]
    InvalidArgument(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建行解析错误
    pub fn decode<T: ToString>(msg: T) -> Self {
        Self::DecodeError(msg.to_string())
    }

    /// 创建未找到错误
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// 创建参数错误
    pub fn invalid_argument<T: ToString>(msg: T) -> Self {
        Self::InvalidArgument(msg.to_string())
    }
}
