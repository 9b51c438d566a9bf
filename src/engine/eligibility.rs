// ==========================================
// 制药生产记录对账系统 - 批次合格性过滤器
// ==========================================
// 职责: 汇总 MFC 的批次量、判定是否达到核对门槛、驾驶舱四层分区
// 红线: 分层判定顺序固定 —— placebo 关键词优先于批次数;
// 一个 5 批次的安慰剂产品归 placebo 层,绝不进 main 层
// ==========================================

use crate::domain::types::BatchTier;
use crate::engine::batch_index::BatchIndex;

/// MFC 的批次画像: 聚合批次数 + 批次号清单
///
/// 清单按产品代码顺序拼接;若集合内两个代码恰好共用同一批次号,
/// 此阶段允许重复出现,不做去重。
#[derive(Debug, Clone, Default)]
pub struct MfcBatchProfile {
    pub total_batches: usize,
    pub batch_numbers: Vec<String>,
}

// ==========================================
// EligibilityEngine - 纯函数工具类
// ==========================================
pub struct EligibilityEngine;

impl EligibilityEngine {
    /// 按产品代码集合汇总批次画像
    pub fn aggregate(product_codes: &[String], index: &BatchIndex) -> MfcBatchProfile {
        let mut profile = MfcBatchProfile::default();
        for code in product_codes {
            profile.total_batches += index.count_for(code);
            for batch in index.batches_for(code) {
                profile.batch_numbers.push(batch.batch_number.clone());
            }
        }
        profile
    }

    /// 是否达到核对门槛（含等于,阈值默认 3）
    pub fn is_qualifying(total_batches: usize, min_batches: u32) -> bool {
        total_batches >= min_batches as usize
    }

    /// 驾驶舱四层分区（互斥,按此判定顺序）
    ///
    /// 1. productName 命中安慰剂关键词 -> Placebo（无视批次数）
    /// 2. 批次数 == 0                  -> NoBatch
    /// 3. 批次数 < 3                   -> LowBatch
    /// 4. 其余                         -> Main
    pub fn classify_tier(
        product_name: Option<&str>,
        total_batches: usize,
        placebo_keywords: &[String],
    ) -> BatchTier {
        if let Some(name) = product_name {
            let lowered = name.to_lowercase();
            if placebo_keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
                return BatchTier::Placebo;
            }
        }
        if total_batches == 0 {
            return BatchTier::NoBatch;
        }
        if total_batches < 3 {
            return BatchTier::LowBatch;
        }
        BatchTier::Main
    }
}
