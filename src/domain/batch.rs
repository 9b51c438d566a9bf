// ==========================================
// 制药生产记录对账系统 - 批次领域模型
// ==========================================
// 不变式: 计数意义上的批次身份 = (itemCode, batchNumber)
// 同一 batchNumber 挂在不同 itemCode 下是两个不同批次
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// BatchRecord - 批次文档
// ==========================================
// 一份文档内含多条批次条目;嵌套数组缺失时贡献为零,不报错
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchRecord {
    pub id: String,

    /// 批次条目数组
    pub batches: Vec<BatchEntry>,
}

// ==========================================
// BatchEntry - 单条批次
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchEntry {
    /// 产品代码（与 MFC 的 join 键）
    pub item_code: Option<String>,

    /// 批次号（在同一 itemCode 下唯一,跨 itemCode 不保证）
    pub batch_number: Option<String>,

    /// 产品名称
    pub item_name: Option<String>,
}

impl BatchEntry {
    pub fn new(item_code: &str, batch_number: &str, item_name: &str) -> Self {
        Self {
            item_code: Some(item_code.to_string()),
            batch_number: Some(batch_number.to_string()),
            item_name: Some(item_name.to_string()),
        }
    }
}
