// ==========================================
// 制药生产记录对账系统 - 驾驶舱 API
// ==========================================
// 职责: 驾驶舱总览 —— 四层分区、去重批次总数、全局批次对账
// 红线: 与核对 API 同一降级契约,内部失败折叠为 success:false
// ==========================================

use tracing::warn;

use crate::api::dto::{DashboardOverviewResponse, ResponseEnvelope, TierPartitionDto};
use crate::api::error::ApiError;
use crate::config::ValidationConfig;
use crate::engine::ReconciliationOrchestrator;
use crate::repository::SourceRepositories;

// ==========================================
// DashboardApi - 驾驶舱接口
// ==========================================

pub struct DashboardApi {
    orchestrator: ReconciliationOrchestrator,
}

impl DashboardApi {
    pub fn new(repos: SourceRepositories, config: ValidationConfig) -> Self {
        Self {
            orchestrator: ReconciliationOrchestrator::new(repos, config),
        }
    }

    /// 驾驶舱总览
    pub async fn get_overview(&self) -> DashboardOverviewResponse {
        match self.orchestrator.dashboard_overview().await {
            Ok(overview) => DashboardOverviewResponse {
                success: true,
                envelope: ResponseEnvelope::stamp(),
                tiers: TierPartitionDto {
                    main: overview.main.into_iter().map(Into::into).collect(),
                    low_batch: overview.low_batch.into_iter().map(Into::into).collect(),
                    no_batch: overview.no_batch.into_iter().map(Into::into).collect(),
                    placebo: overview.placebo.into_iter().map(Into::into).collect(),
                },
                tier_batch_totals: overview.tier_batch_totals,
                batch_reconciliation: Some(overview.batch_reconciliation),
                unmatched_batches: overview.unmatched_batches,
                error: None,
            },
            Err(err) => {
                let err = ApiError::from(err);
                warn!(error = %err, "驾驶舱总览失败,返回降级响应");
                DashboardOverviewResponse::failure(err.to_string())
            }
        }
    }
}
