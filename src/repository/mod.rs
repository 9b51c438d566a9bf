// ==========================================
// 制药生产记录对账系统 - 仓储层
// ==========================================
// 职责: 源集合只读访问口径与默认适配器
// ==========================================

pub mod error;
pub mod memory;
pub mod source_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use memory::{FailingSourceStore, InMemorySourceStore};
pub use source_repo::{
    BatchRepository, CoaRepository, FormulaRepository, RequisitionRepository, SourceRepositories,
};
