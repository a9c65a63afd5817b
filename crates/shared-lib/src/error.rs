//! 📋 配置错误类型

use thiserror::Error;

/// 配置加载错误
///
/// 只有无法解析的配置值才会报错，缺失的配置项一律使用默认值。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("❌ 配置项 {key} 的值 `{value}` 无效: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// 创建无效配置值错误
    pub fn invalid_value<R: ToString>(key: &'static str, value: impl Into<String>, reason: R) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
