//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`: 仓库实例会被多个并发请求共享
//! - `'static`: 作为应用服务长期存活，不依赖短期引用
//!
//! 服务层只依赖 trait，因此测试时可以替换为内存实现，不需要真实的数据库。

pub mod portfolio;

// 重新导出
pub use portfolio::PortfolioRepositoryTrait;
