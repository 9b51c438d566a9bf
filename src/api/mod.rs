// ==========================================
// 制药生产记录对账系统 - API 层
// ==========================================
// 职责: 提供业务接口,供协作方的 HTTP 路由层调用
// 契约: 接口永远返回响应体,不抛错;失败体现在 success:false
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;
pub mod validation_api;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{
    DashboardOverviewResponse, MaterialValidationResponse, MfcTierEntryDto, MissingMaterialDto,
    SectionValidationResponse, TierPartitionDto, ValidationIssueDto,
};
pub use error::{ApiError, ApiResult};
pub use validation_api::ValidationApi;
