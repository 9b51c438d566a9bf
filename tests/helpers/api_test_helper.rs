// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用测试环境
// ==========================================

use mfc_batch_recon::api::{DashboardApi, ValidationApi};
use mfc_batch_recon::config::ValidationConfig;
use mfc_batch_recon::domain::{BatchRecord, CoaRecord, FormulaRecord, RequisitionRecord};
use mfc_batch_recon::repository::{FailingSourceStore, InMemorySourceStore};

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 持有两个 API 门面,共享同一份内存源集合。
pub struct ApiTestEnv {
    pub validation_api: ValidationApi,
    pub dashboard_api: DashboardApi,
}

impl ApiTestEnv {
    pub fn new(
        formulas: Vec<FormulaRecord>,
        batches: Vec<BatchRecord>,
        requisitions: Vec<RequisitionRecord>,
        coa_records: Vec<CoaRecord>,
    ) -> Self {
        Self::with_config(
            formulas,
            batches,
            requisitions,
            coa_records,
            ValidationConfig::default(),
        )
    }

    pub fn with_config(
        formulas: Vec<FormulaRecord>,
        batches: Vec<BatchRecord>,
        requisitions: Vec<RequisitionRecord>,
        coa_records: Vec<CoaRecord>,
        config: ValidationConfig,
    ) -> Self {
        let repos = InMemorySourceStore::new(formulas, batches, requisitions, coa_records)
            .into_repositories();
        Self {
            validation_api: ValidationApi::new(repos.clone(), config.clone()),
            dashboard_api: DashboardApi::new(repos, config),
        }
    }

    /// 所有集合读取都失败的环境,用于降级路径测试
    pub fn failing(message: &str) -> Self {
        let repos = FailingSourceStore::new(message).into_repositories();
        let config = ValidationConfig::default();
        Self {
            validation_api: ValidationApi::new(repos.clone(), config.clone()),
            dashboard_api: DashboardApi::new(repos, config),
        }
    }
}
