// ==========================================
// 制药生产记录对账系统 - 缺料检测器
// ==========================================
// 两个独立变体,都要保留:
//   区段粒度: 逐批次查存在性索引,缺了就发一条问题记录(结构性,不按物料)
//   物料粒度: 逐批次逐物料引用查领料代码集合,缺了发一条缺料明细
// 约定: 零个合格 MFC 时返回空清单,不是错误;截断在 API 层做
// ==========================================

use crate::domain::types::{MaterialType, ValidationSection};
use crate::engine::material_collector::MaterialRef;
use crate::engine::section_index::{RequisitionCodeIndex, SectionAvailabilityIndex};

/// 区段粒度的问题记录（每批次最多一条）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub mfc_no: String,
    pub product_name: Option<String>,
    pub batch_number: String,
    pub message: String,
}

/// 物料粒度的缺料明细
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMaterialEntry {
    pub material_code: String,
    pub material_name: Option<String>,
    pub material_type: MaterialType,
    pub mfc_no: String,
    pub product_name: Option<String>,
    pub batch_number: String,
    pub message: String,
}

// ==========================================
// MissingMaterialDetector - 纯函数工具类
// ==========================================
pub struct MissingMaterialDetector;

impl MissingMaterialDetector {
    /// 区段粒度检测: 该 MFC 的每个批次号,区段数据缺席即发一条问题
    pub fn section_issues(
        mfc_no: &str,
        product_name: Option<&str>,
        batch_numbers: &[String],
        section: ValidationSection,
        availability: &SectionAvailabilityIndex,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for batch_number in batch_numbers {
            if !availability.is_present(batch_number) {
                issues.push(ValidationIssue {
                    mfc_no: mfc_no.to_string(),
                    product_name: product_name.map(str::to_string),
                    batch_number: batch_number.clone(),
                    message: section.missing_data_message(batch_number),
                });
            }
        }
        issues
    }

    /// 物料粒度检测: 逐批次逐物料引用查领料代码集合
    ///
    /// 直查领料单代码集合而不是区段存在性索引 —— 这里要的是
    /// 物料代码粒度,不是"有没有数据"。`type_filter` 只过滤
    /// MFC 侧的物料引用,不改变领料侧的成员判定。
    pub fn missing_materials(
        mfc_no: &str,
        product_name: Option<&str>,
        batch_numbers: &[String],
        materials: &[MaterialRef],
        requisition_codes: &RequisitionCodeIndex,
        type_filter: Option<MaterialType>,
    ) -> Vec<MissingMaterialEntry> {
        let mut entries = Vec::new();
        for batch_number in batch_numbers {
            for material in materials {
                if let Some(filter) = type_filter {
                    if material.material_type != filter {
                        continue;
                    }
                }
                if requisition_codes.contains(batch_number, &material.material_code) {
                    continue;
                }
                entries.push(MissingMaterialEntry {
                    material_code: material.material_code.clone(),
                    material_name: material.material_name.clone(),
                    material_type: material.material_type,
                    mfc_no: mfc_no.to_string(),
                    product_name: product_name.map(str::to_string),
                    batch_number: batch_number.clone(),
                    message: Self::missing_message(material, batch_number),
                });
            }
        }
        entries
    }

    /// 缺料提示语模板（逐字固定）
    fn missing_message(material: &MaterialRef, batch_number: &str) -> String {
        format!(
            "Material {} ({}) was not found in {} requisition for batch {}",
            material.material_code,
            material.material_name.as_deref().unwrap_or(""),
            material.material_type,
            batch_number
        )
    }
}
