// ==========================================
// 制药生产记录对账系统 - 核对 API
// ==========================================
// 职责: 两个查询口 —— 区段核对、全量物料核对
// 红线: 永不向调用方返回 Err —— 输入错误与内部失败一律折叠为
// success:false 的全零响应,携带触发消息
// 截断: 500 条缺料明细 / Top-100 代码汇总在此层做最终裁剪,
// 引擎输出保持未截断,便于独立测试
// ==========================================

use tracing::warn;

use crate::api::dto::{
    MaterialValidationResponse, ResponseEnvelope, SectionValidationResponse,
};
use crate::api::error::ApiError;
use crate::config::ValidationConfig;
use crate::domain::types::{MaterialType, ValidationSection};
use crate::engine::ReconciliationOrchestrator;
use crate::repository::SourceRepositories;

// ==========================================
// ValidationApi - 核对接口
// ==========================================

pub struct ValidationApi {
    orchestrator: ReconciliationOrchestrator,
}

impl ValidationApi {
    pub fn new(repos: SourceRepositories, config: ValidationConfig) -> Self {
        Self {
            orchestrator: ReconciliationOrchestrator::new(repos, config),
        }
    }

    /// 区段核对
    ///
    /// # 参数
    /// - section: 必填,Bulk/Finish/RM/PPM/PM(大小写不敏感);
    ///   缺失或无法识别 -> 显式失败响应,绝不静默取默认区段
    /// - min_batches: 合格阈值,缺省取配置(默认 3)
    pub async fn validate_section(
        &self,
        section: Option<&str>,
        min_batches: Option<u32>,
    ) -> SectionValidationResponse {
        let Some(raw_section) = section else {
            return SectionValidationResponse::failure(
                "",
                "Missing required parameter 'section'. Expected one of: Bulk, Finish, RM, PPM, PM.",
            );
        };
        let Some(parsed) = ValidationSection::parse(raw_section) else {
            warn!(section = raw_section, "区段参数无法识别");
            return SectionValidationResponse::failure(
                raw_section,
                format!(
                    "Invalid section '{}'. Expected one of: Bulk, Finish, RM, PPM, PM.",
                    raw_section
                ),
            );
        };

        match self.orchestrator.validate_section(parsed, min_batches).await {
            Ok(result) => SectionValidationResponse {
                success: true,
                envelope: ResponseEnvelope::stamp(),
                section: parsed.to_string(),
                total_mfcs: result.total_mfcs,
                total_batches: result.total_batches,
                batches_with_data: result.batches_with_data,
                batches_missing_data: result.batches_missing_data,
                issues: result.issues.into_iter().map(Into::into).collect(),
                error: None,
            },
            Err(err) => {
                let err = ApiError::from(err);
                warn!(section = %parsed, error = %err, "区段核对失败,返回降级响应");
                SectionValidationResponse::failure(&parsed.to_string(), err.to_string())
            }
        }
    }

    /// 全量物料核对
    ///
    /// # 参数
    /// - min_batches: 合格阈值,缺省取配置(默认 3)
    /// - material_type: 可选类别过滤,RM/PM/PPM;无法识别 -> 失败响应
    pub async fn validate_materials(
        &self,
        min_batches: Option<u32>,
        material_type: Option<&str>,
    ) -> MaterialValidationResponse {
        let type_filter = match material_type {
            None => None,
            Some(raw) => match MaterialType::from_code(raw.trim()) {
                Some(t) => Some(t),
                None => {
                    warn!(material_type = raw, "物料类别过滤参数无法识别");
                    return MaterialValidationResponse::failure(format!(
                        "Invalid materialType '{}'. Expected one of: RM, PM, PPM.",
                        raw
                    ));
                }
            },
        };

        match self
            .orchestrator
            .validate_materials(min_batches, type_filter)
            .await
        {
            Ok(result) => {
                let config = self.orchestrator.config();
                let mut missing = result.missing_materials;
                missing.truncate(config.missing_material_cap);
                let mut code_summary = result.material_code_summary;
                code_summary.truncate(config.code_summary_cap);

                MaterialValidationResponse {
                    success: true,
                    envelope: ResponseEnvelope::stamp(),
                    total_mfcs: result.total_mfcs,
                    total_batches: result.total_batches,
                    total_materials_in_mfc: result.total_materials_in_mfc,
                    total_missing_materials: result.total_missing_materials,
                    unique_batches_affected: result.unique_batches_affected,
                    missing_by_type: result.missing_by_type,
                    missing_materials: missing.into_iter().map(Into::into).collect(),
                    material_code_summary: code_summary,
                    error: None,
                }
            }
            Err(err) => {
                let err = ApiError::from(err);
                warn!(error = %err, "物料核对失败,返回降级响应");
                MaterialValidationResponse::failure(err.to_string())
            }
        }
    }
}
