// ==========================================
// 制药生产记录对账系统 - 对账汇总器
// ==========================================
// 职责: 纯滚动汇总,不含任何新的匹配逻辑
//   按类别计数(缺席类别报 0 不是缺键)、缺料清单的去重批次数、
//   物料代码 Top 汇总(不截断)、全局批次对账
// ==========================================

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::types::MaterialType;
use crate::engine::batch_index::BatchIndex;
use crate::engine::missing_material::MissingMaterialEntry;

/// 按类别的缺料计数（三个类别都从 0 起,绝不缺键）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissingByType {
    #[serde(rename = "RM")]
    pub rm: usize,
    #[serde(rename = "PPM")]
    pub ppm: usize,
    #[serde(rename = "PM")]
    pub pm: usize,
}

/// 物料代码汇总行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCodeSummary {
    pub material_code: String,
    pub material_name: Option<String>,
    /// 受影响的去重批次数（排序键,降序）
    pub affected_batches: usize,
    /// 缺料明细条数
    pub occurrences: usize,
}

/// 全局批次对账摘要
///
/// 孤儿批次（itemCode 未被任何 MFC 认领）是数据质量告警,
/// 单独列出,不算对账失败。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReconciliationSummary {
    pub total_batches_in_system: usize,
    pub batches_matched_to_formula: usize,
    pub batches_not_matched_to_formula: usize,
    /// 对账完成率,四舍五入到整数百分比
    pub reconciliation_pct: u32,
    pub all_batches_accounted_for: bool,
}

/// 孤儿批次行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedBatch {
    pub item_code: String,
    pub batch_count: usize,
}

// ==========================================
// ReconciliationSummarizer - 纯函数工具类
// ==========================================
pub struct ReconciliationSummarizer;

impl ReconciliationSummarizer {
    /// 按类别统计缺料条数
    pub fn count_by_type(entries: &[MissingMaterialEntry]) -> MissingByType {
        let mut by_type = MissingByType::default();
        for entry in entries {
            match entry.material_type {
                MaterialType::Rm => by_type.rm += 1,
                MaterialType::Ppm => by_type.ppm += 1,
                MaterialType::Pm => by_type.pm += 1,
            }
        }
        by_type
    }

    /// 缺料清单涉及的去重批次数
    pub fn unique_batches(entries: &[MissingMaterialEntry]) -> usize {
        entries
            .iter()
            .map(|e| e.batch_number.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// 物料代码汇总（不截断,截断由 API 层做）
    ///
    /// 排序: 受影响去重批次数降序,同数按代码升序保证确定性。
    pub fn code_summary(entries: &[MissingMaterialEntry]) -> Vec<MaterialCodeSummary> {
        let mut batches_by_code: HashMap<&str, HashSet<&str>> = HashMap::new();
        let mut occurrences_by_code: HashMap<&str, usize> = HashMap::new();
        let mut name_by_code: HashMap<&str, Option<&String>> = HashMap::new();

        for entry in entries {
            let code = entry.material_code.as_str();
            batches_by_code
                .entry(code)
                .or_default()
                .insert(entry.batch_number.as_str());
            *occurrences_by_code.entry(code).or_insert(0) += 1;
            name_by_code.entry(code).or_insert(entry.material_name.as_ref());
        }

        let mut rows: Vec<MaterialCodeSummary> = batches_by_code
            .into_iter()
            .map(|(code, batches)| MaterialCodeSummary {
                material_code: code.to_string(),
                material_name: name_by_code
                    .get(code)
                    .and_then(|n| n.map(|s| s.to_string())),
                affected_batches: batches.len(),
                occurrences: occurrences_by_code.get(code).copied().unwrap_or(0),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.affected_batches
                .cmp(&a.affected_batches)
                .then_with(|| a.material_code.cmp(&b.material_code))
        });
        rows
    }

    /// 全局批次对账: 每个批次的 itemCode 是否被至少一张 MFC 认领
    ///
    /// 零批次系统的完成率约定报 100%（空系统没有未对上的账）。
    pub fn reconcile_batches(
        index: &BatchIndex,
        claimed_codes: &HashSet<String>,
    ) -> (BatchReconciliationSummary, Vec<UnmatchedBatch>) {
        let total = index.total_batches();
        let mut matched = 0;
        let mut unmatched: Vec<UnmatchedBatch> = Vec::new();

        for code in index.item_codes() {
            let count = index.count_for(code);
            if claimed_codes.contains(code) {
                matched += count;
            } else {
                unmatched.push(UnmatchedBatch {
                    item_code: code.clone(),
                    batch_count: count,
                });
            }
        }
        unmatched.sort_by(|a, b| {
            b.batch_count
                .cmp(&a.batch_count)
                .then_with(|| a.item_code.cmp(&b.item_code))
        });

        let not_matched = total - matched;
        let pct = if total == 0 {
            100
        } else {
            ((matched as f64 / total as f64) * 100.0).round() as u32
        };

        (
            BatchReconciliationSummary {
                total_batches_in_system: total,
                batches_matched_to_formula: matched,
                batches_not_matched_to_formula: not_matched,
                reconciliation_pct: pct,
                all_batches_accounted_for: not_matched == 0,
            },
            unmatched,
        )
    }
}
