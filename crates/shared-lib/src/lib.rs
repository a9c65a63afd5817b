//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置
//! - 配置错误类型

pub mod error;
pub mod models;

// 重新导出常用类型
pub use error::ConfigError;
pub use models::{AppConfig, DatabaseConfig};
