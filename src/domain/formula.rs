// ==========================================
// 制药生产记录对账系统 - MFC 领域模型
// ==========================================
// MFC (Master Formula Card): 产品配方主卡
// 红线: 宽容读取 —— 除标识字段外全部可缺失,缺失等于"不贡献",不报错
// 说明: 上游解析质量不稳定,字段命名沿用源文档的 camelCase
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FormulaRecord - 配方主卡
// ==========================================
// 一张 MFC 可声明多个产品代码: 主代码 + 灌装明细代码 + 工序灌装产品代码
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormulaRecord {
    // ===== 标识 =====
    pub id: String, // 记录唯一标识

    /// MFC 编号（人工编号,去空白后也不保证全局唯一）
    pub master_card_no: Option<String>,

    /// 主产品代码
    pub product_code: Option<String>,

    /// 产品名称（分层关键词判定依据）
    pub product_name: Option<String>,

    // ===== 嵌套结构 =====
    /// 灌装明细（每条可带自己的产品代码与包材清单）
    pub filling_details: Vec<FillingDetail>,

    /// 工序清单（每道工序带物料与灌装产品）
    pub processes: Vec<ProcessDetail>,

    // ===== 物料清单 =====
    /// 配料原料清单（RM）
    pub materials: Vec<MaterialEntry>,

    /// 包材清单（PM）
    pub packing_materials: Vec<MaterialEntry>,
}

// ==========================================
// FillingDetail - 灌装明细
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillingDetail {
    /// 本明细的产品代码
    pub product_code: Option<String>,

    /// 本明细的包材清单（PPM）
    pub packing_materials: Vec<MaterialEntry>,
}

// ==========================================
// ProcessDetail - 工序
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessDetail {
    /// 工序名称
    pub process_name: Option<String>,

    /// 工序物料（类别按 materialType 字段三分支判定,兜底 RM）
    pub materials: Vec<MaterialEntry>,

    /// 工序灌装产品
    pub filling_products: Vec<FillingProduct>,
}

// ==========================================
// FillingProduct - 工序灌装产品
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillingProduct {
    /// 灌装产品自己的产品代码
    pub product_code: Option<String>,

    /// 嵌套物料清单（固定按 PPM 处理,忽略内嵌 materialType）
    pub materials: Vec<MaterialEntry>,
}

// ==========================================
// MaterialEntry - 物料条目
// ==========================================
// 不变式: 没有 materialCode 的条目无意义,采集时静默丢弃
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialEntry {
    /// 物料代码
    pub material_code: Option<String>,

    /// 物料名称
    pub material_name: Option<String>,

    /// 物料类别源字段（RM/PPM/PM,质量不稳定）
    pub material_type: Option<String>,
}

impl MaterialEntry {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            material_code: Some(code.to_string()),
            material_name: Some(name.to_string()),
            material_type: None,
        }
    }

    pub fn with_type(code: &str, name: &str, material_type: &str) -> Self {
        Self {
            material_code: Some(code.to_string()),
            material_name: Some(name.to_string()),
            material_type: Some(material_type.to_string()),
        }
    }
}
