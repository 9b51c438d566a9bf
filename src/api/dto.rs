// ==========================================
// 制药生产记录对账系统 - API 层 DTO 定义
// ==========================================
// 职责: 定义核对接口的响应结构
// 约定: 字段走 camelCase(与源文档和前端约定一致);
// 每个响应带 reportId/generatedAt 信封,导出报表可回溯请求
// ==========================================

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::engine::missing_material::{MissingMaterialEntry, ValidationIssue};
use crate::engine::orchestrator::MfcTierEntry;
use crate::engine::summary::{
    BatchReconciliationSummary, MaterialCodeSummary, MissingByType, UnmatchedBatch,
};
use crate::engine::TierBatchTotals;

/// 响应信封字段（所有响应共用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// 本次请求的报告标识
    pub report_id: Uuid,

    /// 生成时刻 (ISO 8601)
    pub generated_at: String,
}

impl ResponseEnvelope {
    pub fn stamp() -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

// ==========================================
// 区段核对响应
// ==========================================

/// 区段问题 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssueDto {
    pub mfc_no: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    pub batch_number: String,

    /// 固定模板文案（见 ValidationSection::missing_data_message）
    pub message: String,
}

impl From<ValidationIssue> for ValidationIssueDto {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            mfc_no: issue.mfc_no,
            product_name: issue.product_name,
            batch_number: issue.batch_number,
            message: issue.message,
        }
    }
}

/// 区段核对响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionValidationResponse {
    pub success: bool,

    #[serde(flatten)]
    pub envelope: ResponseEnvelope,

    /// 请求的区段,原样回显（含被拒绝的非法值）
    pub section: String,

    pub total_mfcs: usize,
    pub total_batches: usize,
    pub batches_with_data: usize,
    pub batches_missing_data: usize,

    pub issues: Vec<ValidationIssueDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SectionValidationResponse {
    /// 全零降级响应（输入错误或内部失败）
    pub fn failure(section: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            envelope: ResponseEnvelope::stamp(),
            section: section.to_string(),
            total_mfcs: 0,
            total_batches: 0,
            batches_with_data: 0,
            batches_missing_data: 0,
            issues: Vec::new(),
            error: Some(message.into()),
        }
    }
}

// ==========================================
// 全量物料核对响应
// ==========================================

/// 缺料明细 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingMaterialDto {
    pub material_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_name: Option<String>,

    /// RM / PPM / PM
    pub material_type: String,

    pub mfc_no: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    pub batch_number: String,

    /// 固定模板文案
    pub message: String,
}

impl From<MissingMaterialEntry> for MissingMaterialDto {
    fn from(entry: MissingMaterialEntry) -> Self {
        Self {
            material_code: entry.material_code,
            material_name: entry.material_name,
            material_type: entry.material_type.to_string(),
            mfc_no: entry.mfc_no,
            product_name: entry.product_name,
            batch_number: entry.batch_number,
            message: entry.message,
        }
    }
}

/// 全量物料核对响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialValidationResponse {
    pub success: bool,

    #[serde(flatten)]
    pub envelope: ResponseEnvelope,

    pub total_mfcs: usize,
    pub total_batches: usize,
    pub total_materials_in_mfc: usize,
    pub total_missing_materials: usize,

    /// 缺料清单涉及的去重批次数
    pub unique_batches_affected: usize,

    /// 三个类别固定在场,缺席类别报 0
    pub missing_by_type: MissingByType,

    /// 缺料明细（截断到 500 条,完整数据请分页重查）
    pub missing_materials: Vec<MissingMaterialDto>,

    /// 物料代码汇总（Top-100,按受影响去重批次数降序）
    pub material_code_summary: Vec<MaterialCodeSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MaterialValidationResponse {
    /// 全零降级响应
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            envelope: ResponseEnvelope::stamp(),
            total_mfcs: 0,
            total_batches: 0,
            total_materials_in_mfc: 0,
            total_missing_materials: 0,
            unique_batches_affected: 0,
            missing_by_type: MissingByType::default(),
            missing_materials: Vec::new(),
            material_code_summary: Vec::new(),
            error: Some(message.into()),
        }
    }
}

// ==========================================
// 驾驶舱总览响应
// ==========================================

/// 分层条目 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfcTierEntryDto {
    pub mfc_no: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// 首次发现顺序的产品代码集合
    pub product_codes: Vec<String>,

    pub total_batches: usize,

    /// 批次号清单（随行返回,前端展开 MFC 行无需二次查询）
    pub batch_numbers: Vec<String>,
}

impl From<MfcTierEntry> for MfcTierEntryDto {
    fn from(entry: MfcTierEntry) -> Self {
        Self {
            mfc_no: entry.mfc_no,
            product_name: entry.product_name,
            product_codes: entry.product_codes,
            total_batches: entry.total_batches,
            batch_numbers: entry.batch_numbers,
        }
    }
}

/// 四层分区 DTO
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPartitionDto {
    pub main: Vec<MfcTierEntryDto>,
    pub low_batch: Vec<MfcTierEntryDto>,
    pub no_batch: Vec<MfcTierEntryDto>,
    pub placebo: Vec<MfcTierEntryDto>,
}

/// 驾驶舱总览响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewResponse {
    pub success: bool,

    #[serde(flatten)]
    pub envelope: ResponseEnvelope,

    pub tiers: TierPartitionDto,

    /// 去重后的分层批次总数（四层之和不超过系统批次总数）
    pub tier_batch_totals: TierBatchTotals,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_reconciliation: Option<BatchReconciliationSummary>,

    /// 孤儿批次（数据质量告警,不算对账失败）
    pub unmatched_batches: Vec<UnmatchedBatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DashboardOverviewResponse {
    /// 全零降级响应
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            envelope: ResponseEnvelope::stamp(),
            tiers: TierPartitionDto::default(),
            tier_batch_totals: TierBatchTotals::default(),
            batch_reconciliation: None,
            unmatched_batches: Vec::new(),
            error: Some(message.into()),
        }
    }
}
