// ==========================================
// 制药生产记录对账系统 - 内存源集合存储
// ==========================================
// 用途: 协作方注入已解析记录的默认适配器,也是测试后端
// 说明: 持久化引擎选型是协作方的事,核心只要求可读
// ==========================================

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{BatchRecord, CoaRecord, FormulaRecord, RequisitionRecord};
use crate::repository::error::RepositoryResult;
use crate::repository::source_repo::{
    BatchRepository, CoaRepository, FormulaRepository, RequisitionRepository, SourceRepositories,
};

/// 内存源集合存储
///
/// 一次性装入三方集合与 COA 记录,之后只读。
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceStore {
    formulas: Vec<FormulaRecord>,
    batches: Vec<BatchRecord>,
    requisitions: Vec<RequisitionRecord>,
    coa_records: Vec<CoaRecord>,
}

impl InMemorySourceStore {
    pub fn new(
        formulas: Vec<FormulaRecord>,
        batches: Vec<BatchRecord>,
        requisitions: Vec<RequisitionRecord>,
        coa_records: Vec<CoaRecord>,
    ) -> Self {
        Self {
            formulas,
            batches,
            requisitions,
            coa_records,
        }
    }

    /// 打包为仓储集合（四个 trait 共享同一份只读数据）
    pub fn into_repositories(self) -> SourceRepositories {
        let store = Arc::new(self);
        SourceRepositories::new(store.clone(), store.clone(), store.clone(), store)
    }
}

#[async_trait]
impl FormulaRepository for InMemorySourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<FormulaRecord>> {
        Ok(self.formulas.clone())
    }
}

#[async_trait]
impl BatchRepository for InMemorySourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<BatchRecord>> {
        Ok(self.batches.clone())
    }
}

#[async_trait]
impl RequisitionRepository for InMemorySourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<RequisitionRecord>> {
        Ok(self.requisitions.clone())
    }
}

#[async_trait]
impl CoaRepository for InMemorySourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<CoaRecord>> {
        Ok(self.coa_records.clone())
    }
}

// ==========================================
// FailingSourceStore - 故障注入存储
// ==========================================
// 用于验证"集合访问失败 -> success:false 降级响应"的错误路径

/// 所有读取都返回失败的存储,携带固定错误消息
#[derive(Debug, Clone)]
pub struct FailingSourceStore {
    pub message: String,
}

impl FailingSourceStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn into_repositories(self) -> SourceRepositories {
        let store = Arc::new(self);
        SourceRepositories::new(store.clone(), store.clone(), store.clone(), store)
    }

    fn fail<T>(&self, collection: &str) -> RepositoryResult<T> {
        Err(crate::repository::error::RepositoryError::read_failed(
            collection,
            self.message.clone(),
        ))
    }
}

#[async_trait]
impl FormulaRepository for FailingSourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<FormulaRecord>> {
        self.fail("formula")
    }
}

#[async_trait]
impl BatchRepository for FailingSourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<BatchRecord>> {
        self.fail("batch")
    }
}

#[async_trait]
impl RequisitionRepository for FailingSourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<RequisitionRecord>> {
        self.fail("requisition")
    }
}

#[async_trait]
impl CoaRepository for FailingSourceStore {
    async fn load_all(&self) -> RepositoryResult<Vec<CoaRecord>> {
        self.fail("coa")
    }
}
