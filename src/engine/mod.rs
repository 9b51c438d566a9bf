// ==========================================
// 制药生产记录对账系统 - 引擎层
// ==========================================
// 职责: 核对规则本体,八个组件
// 数据单向流动: 源集合 -> 索引 -> 逐 MFC 提取 -> 过滤 -> 检测
//               -> 去重聚合 -> 汇总
// 红线: 引擎不改源集合;索引每请求建一次,禁止逐 MFC 重建
// ==========================================

pub mod batch_index;
pub mod dedup_aggregator;
pub mod eligibility;
pub mod material_collector;
pub mod missing_material;
pub mod orchestrator;
pub mod product_code;
pub mod section_index;
pub mod summary;

// 重导出核心引擎
pub use batch_index::{BatchIndex, BatchSummary};
pub use dedup_aggregator::{BatchDedupAggregator, TierBatchTotals};
pub use eligibility::{EligibilityEngine, MfcBatchProfile};
pub use material_collector::{MaterialCollector, MaterialRef};
pub use missing_material::{MissingMaterialDetector, MissingMaterialEntry, ValidationIssue};
pub use orchestrator::{
    DashboardOverview, MaterialValidationResult, MfcTierEntry, ReconciliationOrchestrator,
    SectionValidationResult,
};
pub use product_code::ProductCodeResolver;
pub use section_index::{RequisitionCodeIndex, SectionAvailabilityIndex};
pub use summary::{
    BatchReconciliationSummary, MaterialCodeSummary, MissingByType, ReconciliationSummarizer,
    UnmatchedBatch,
};
