// ==========================================
// 制药生产记录对账系统 - 区段可用性索引
// ==========================================
// 职责: 建立 批次号 -> "该区段数据是否存在" 的存在性索引
//   Bulk/Finish 来源于 COA(按阶段过滤)
//   RM/PPM/PM  来源于领料单(批次内至少一条对应类别物料)
// 约定: 索引里没有的批次号就是"不存在",缺席是默认值不是错误
// ==========================================

use std::collections::{HashMap, HashSet};

use crate::domain::types::{CoaStage, MaterialType, SectionSource, ValidationSection};
use crate::domain::{CoaRecord, RequisitionRecord};

// ==========================================
// SectionAvailabilityIndex - 存在性索引
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SectionAvailabilityIndex {
    present: HashSet<String>,
}

impl SectionAvailabilityIndex {
    /// 按目标区段建立索引
    pub fn build(
        section: ValidationSection,
        coa_records: &[CoaRecord],
        requisitions: &[RequisitionRecord],
    ) -> Self {
        match section.source() {
            SectionSource::Coa(stage) => Self::from_coa(coa_records, stage),
            SectionSource::Requisition(material_type) => {
                Self::from_requisitions(requisitions, material_type)
            }
        }
    }

    /// 从 COA 记录建立（按阶段过滤）
    pub fn from_coa(records: &[CoaRecord], stage: CoaStage) -> Self {
        let mut present = HashSet::new();
        for record in records {
            let Some(batch_number) = &record.batch_number else {
                continue;
            };
            let matches = record
                .stage
                .as_deref()
                .and_then(CoaStage::from_code)
                .map(|s| s == stage)
                .unwrap_or(false);
            if matches && !batch_number.is_empty() {
                present.insert(batch_number.clone());
            }
        }
        Self { present }
    }

    /// 从领料单建立（批次内至少一条目标类别物料即视为存在）
    pub fn from_requisitions(records: &[RequisitionRecord], material_type: MaterialType) -> Self {
        let mut present = HashSet::new();
        for record in records {
            for group in &record.batch_groups {
                let Some(batch_number) = &group.batch_number else {
                    continue;
                };
                if batch_number.is_empty() || present.contains(batch_number) {
                    continue;
                }
                let has_type = group.materials.iter().any(|m| {
                    m.material_type
                        .as_deref()
                        .and_then(MaterialType::from_code)
                        .map(|t| t == material_type)
                        .unwrap_or(false)
                });
                if has_type {
                    present.insert(batch_number.clone());
                }
            }
        }
        Self { present }
    }

    /// 指定批次号的区段数据是否存在
    pub fn is_present(&self, batch_number: &str) -> bool {
        self.present.contains(batch_number)
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

// ==========================================
// RequisitionCodeIndex - 批次级物料代码索引
// ==========================================
// 物料粒度检测变体用: 批次号 -> 该批次实际领用的物料代码集合,
// 可选按类别过滤后再查成员关系

#[derive(Debug, Clone, Default)]
pub struct RequisitionCodeIndex {
    codes_by_batch: HashMap<String, HashSet<String>>,
}

impl RequisitionCodeIndex {
    /// 建立索引（单次扫描领料单集合）
    ///
    /// 成员关系不区分类别: 历史行为是"该批次领过该代码即算有",
    /// 类别过滤只作用在 MFC 侧的物料引用上。
    pub fn build(records: &[RequisitionRecord]) -> Self {
        let mut codes_by_batch: HashMap<String, HashSet<String>> = HashMap::new();

        for record in records {
            for group in &record.batch_groups {
                let Some(batch_number) = &group.batch_number else {
                    continue;
                };
                if batch_number.is_empty() {
                    continue;
                }
                for material in &group.materials {
                    let Some(code) = &material.material_code else {
                        continue;
                    };
                    if code.is_empty() {
                        continue;
                    }
                    codes_by_batch
                        .entry(batch_number.clone())
                        .or_default()
                        .insert(code.clone());
                }
            }
        }

        Self { codes_by_batch }
    }

    /// 该批次是否领用过该物料代码
    pub fn contains(&self, batch_number: &str, material_code: &str) -> bool {
        self.codes_by_batch
            .get(batch_number)
            .map(|codes| codes.contains(material_code))
            .unwrap_or(false)
    }
}
