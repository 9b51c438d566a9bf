// ==========================================
// 制药生产记录对账系统 - 源集合只读访问
// ==========================================
// 职责: 定义三方源集合 (Formula/Batch/Requisition) 与 COA 的读取口径
// 红线: 核心对源集合只读;重试策略属于协作方的数据访问层,这里不做
// ==========================================

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{BatchRecord, CoaRecord, FormulaRecord, RequisitionRecord};
use crate::repository::error::RepositoryResult;

// ==========================================
// 集合读取 trait
// ==========================================

/// MFC 集合读取
#[async_trait]
pub trait FormulaRepository: Send + Sync {
    /// 全量读取 MFC 记录
    async fn load_all(&self) -> RepositoryResult<Vec<FormulaRecord>>;
}

/// 批次集合读取
#[async_trait]
pub trait BatchRepository: Send + Sync {
    /// 全量读取批次文档
    async fn load_all(&self) -> RepositoryResult<Vec<BatchRecord>>;
}

/// 领料单集合读取
#[async_trait]
pub trait RequisitionRepository: Send + Sync {
    /// 全量读取领料单文档
    async fn load_all(&self) -> RepositoryResult<Vec<RequisitionRecord>>;
}

/// COA 集合读取
#[async_trait]
pub trait CoaRepository: Send + Sync {
    /// 全量读取 COA 记录
    async fn load_all(&self) -> RepositoryResult<Vec<CoaRecord>>;
}

// ==========================================
// SourceRepositories - 仓储聚合
// ==========================================

/// 核对引擎仓储集合
///
/// 聚合核对引擎所需的全部只读仓储,简化依赖注入,
/// 便于测试时整体替换为内存实现。
#[derive(Clone)]
pub struct SourceRepositories {
    /// MFC 仓储
    pub formula_repo: Arc<dyn FormulaRepository>,
    /// 批次仓储
    pub batch_repo: Arc<dyn BatchRepository>,
    /// 领料单仓储
    pub requisition_repo: Arc<dyn RequisitionRepository>,
    /// COA 仓储
    pub coa_repo: Arc<dyn CoaRepository>,
}

impl SourceRepositories {
    /// 创建新的仓储集合
    pub fn new(
        formula_repo: Arc<dyn FormulaRepository>,
        batch_repo: Arc<dyn BatchRepository>,
        requisition_repo: Arc<dyn RequisitionRepository>,
        coa_repo: Arc<dyn CoaRepository>,
    ) -> Self {
        Self {
            formula_repo,
            batch_repo,
            requisition_repo,
            coa_repo,
        }
    }
}
