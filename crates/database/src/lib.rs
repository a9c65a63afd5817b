//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、项目/里程碑模型以及数据访问层

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::{
    Milestone, MilestoneCreate, MilestoneType, MilestoneUpdate, Project, ProjectCreate, ProjectUpdate, PUBLISHED_STATUS,
};
pub use repositories::{PartialUpdate, PortfolioRepository, PortfolioRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
