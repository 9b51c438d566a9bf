// ==========================================
// 制药生产记录对账系统 - COA 领域模型
// ==========================================
// COA (Certificate of Analysis): 每条记录对应 (批次号, 阶段),
// 存在即表示该批次该阶段的检验数据可用,核对引擎只用作存在性信号
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CoaRecord - COA 记录
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoaRecord {
    pub id: String,

    /// 批次号
    pub batch_number: Option<String>,

    /// 阶段源字段（BULK / FINISH）
    pub stage: Option<String>,
}

impl CoaRecord {
    pub fn new(batch_number: &str, stage: &str) -> Self {
        Self {
            id: String::new(),
            batch_number: Some(batch_number.to_string()),
            stage: Some(stage.to_string()),
        }
    }
}
