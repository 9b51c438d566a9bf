// ==========================================
// 制药生产记录对账系统 - 去重批次聚合器
// ==========================================
// 职责: 跨分层汇总批次总数时,保证同一产品代码只计一次
// 红线: "已计数"集合显式作为参数穿透,不做模块级状态 ——
// 保证并发请求各自可重入
// 处理顺序固定: main -> low_batch -> no_batch -> placebo,
// 共享代码归先处理到的那层,后到者整体跳过
// ==========================================

use std::collections::HashSet;

use serde::Serialize;

use crate::engine::batch_index::BatchIndex;

/// 分层批次总数
///
/// 不变式: 四层之和 <= 批次索引的全系统总数,
/// 当且仅当索引内每个代码都被某张 MFC 认领时取等
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBatchTotals {
    pub main: usize,
    pub low_batch: usize,
    pub no_batch: usize,
    pub placebo: usize,
}

impl TierBatchTotals {
    pub fn grand_total(&self) -> usize {
        self.main + self.low_batch + self.no_batch + self.placebo
    }
}

// ==========================================
// BatchDedupAggregator - 纯函数工具类
// ==========================================
pub struct BatchDedupAggregator;

impl BatchDedupAggregator {
    /// 汇总单层的批次总数
    ///
    /// `counted` 是跨层共享的"已计数"产品代码集合,调用方负责
    /// 按固定层序依次传入同一个集合。
    pub fn tally_tier(
        mfc_code_sets: &[Vec<String>],
        index: &BatchIndex,
        counted: &mut HashSet<String>,
    ) -> usize {
        let mut total = 0;
        for codes in mfc_code_sets {
            for code in codes {
                if counted.contains(code) {
                    continue;
                }
                total += index.count_for(code);
                counted.insert(code.clone());
            }
        }
        total
    }

    /// 按固定层序汇总四层批次总数
    pub fn tally_all(
        main: &[Vec<String>],
        low_batch: &[Vec<String>],
        no_batch: &[Vec<String>],
        placebo: &[Vec<String>],
        index: &BatchIndex,
    ) -> TierBatchTotals {
        let mut counted: HashSet<String> = HashSet::new();
        TierBatchTotals {
            main: Self::tally_tier(main, index, &mut counted),
            low_batch: Self::tally_tier(low_batch, index, &mut counted),
            no_batch: Self::tally_tier(no_batch, index, &mut counted),
            placebo: Self::tally_tier(placebo, index, &mut counted),
        }
    }
}
