// ==========================================
// 制药生产记录对账系统 - 核对参数配置
// ==========================================
// 职责: 集中管理核对引擎的可调参数
// 说明: 截断上限属于响应体积保护,不影响核对正确性
// ==========================================

use serde::{Deserialize, Serialize};

/// 批次数量合格阈值默认值
pub const DEFAULT_MIN_BATCHES: u32 = 3;

/// 缺料明细单次响应上限
pub const DEFAULT_MISSING_MATERIAL_CAP: usize = 500;

/// 物料代码汇总 Top-N 上限
pub const DEFAULT_CODE_SUMMARY_CAP: usize = 100;

/// 核对引擎配置
///
/// 所有字段都有默认值,反序列化缺失字段时回退到默认。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// MFC 合格所需的最小批次数（含等于,默认 3）
    #[serde(default = "default_min_batches")]
    pub min_batches: u32,

    /// 缺料明细截断上限（默认 500）
    #[serde(default = "default_missing_material_cap")]
    pub missing_material_cap: usize,

    /// 物料代码汇总截断上限（默认 100）
    #[serde(default = "default_code_summary_cap")]
    pub code_summary_cap: usize,

    /// 安慰剂/培养基灌装关键词（命中即归入 placebo 分层,不看批次数）
    #[serde(default = "default_placebo_keywords")]
    pub placebo_keywords: Vec<String>,
}

fn default_min_batches() -> u32 {
    DEFAULT_MIN_BATCHES
}

fn default_missing_material_cap() -> usize {
    DEFAULT_MISSING_MATERIAL_CAP
}

fn default_code_summary_cap() -> usize {
    DEFAULT_CODE_SUMMARY_CAP
}

fn default_placebo_keywords() -> Vec<String> {
    vec![
        "placebo".to_string(),
        "mediafill".to_string(),
        "media fill".to_string(),
    ]
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_batches: default_min_batches(),
            missing_material_cap: default_missing_material_cap(),
            code_summary_cap: default_code_summary_cap(),
            placebo_keywords: default_placebo_keywords(),
        }
    }
}

impl ValidationConfig {
    /// 以指定阈值覆盖默认配置（调用方按请求传入 minBatches 时使用）
    pub fn with_min_batches(min_batches: u32) -> Self {
        Self {
            min_batches,
            ..Self::default()
        }
    }
}
