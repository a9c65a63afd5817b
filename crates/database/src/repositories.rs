//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod portfolio;
pub mod traits;
pub mod update;

mod rows;

// 重新导出具体的类型
pub use portfolio::PortfolioRepository;
pub use traits::PortfolioRepositoryTrait;
pub use update::{ColumnValue, PartialUpdate};
