// ==========================================
// 制药生产记录对账系统 - 领料单领域模型
// ==========================================
// 不变式: (batchNumber, materialCode) 对存在即表示该批次领过该物料;
// 缺失即是缺口,缺口由检测器产出结构化记录,不是错误
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RequisitionRecord - 领料单文档
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequisitionRecord {
    pub id: String,

    /// 按批次分组的领料记录
    pub batch_groups: Vec<BatchRequisitionGroup>,
}

// ==========================================
// BatchRequisitionGroup - 单批次领料组
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchRequisitionGroup {
    /// 批次号
    pub batch_number: Option<String>,

    /// 本批次实际领用的物料
    pub materials: Vec<RequisitionMaterial>,
}

// ==========================================
// RequisitionMaterial - 领用物料
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequisitionMaterial {
    /// 物料代码
    pub material_code: Option<String>,

    /// 物料类别（RM/PPM/PM）
    pub material_type: Option<String>,
}

impl RequisitionMaterial {
    pub fn new(material_code: &str, material_type: &str) -> Self {
        Self {
            material_code: Some(material_code.to_string()),
            material_type: Some(material_type.to_string()),
        }
    }
}
