// ==========================================
// 制药生产记录对账系统 - 领域类型定义
// ==========================================
// 物料类别: RM(配料原料) / PPM(灌装级包材) / PM(普通包材)
// 核对区段: Bulk/Finish 来源于 COA, RM/PPM/PM 来源于领料单
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 物料类别 (Material Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    #[serde(rename = "RM")]
    Rm, // 原料（配料）
    #[serde(rename = "PPM")]
    Ppm, // 灌装级包材
    #[serde(rename = "PM")]
    Pm, // 普通包材
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialType::Rm => write!(f, "RM"),
            MaterialType::Ppm => write!(f, "PPM"),
            MaterialType::Pm => write!(f, "PM"),
        }
    }
}

impl MaterialType {
    /// 从源字段字符串解析（精确匹配,不做兜底）
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "RM" => Some(MaterialType::Rm),
            "PPM" => Some(MaterialType::Ppm),
            "PM" => Some(MaterialType::Pm),
            _ => None,
        }
    }

    /// 工序物料的类别判定: PM / PPM 显式命中,其余一律回退 RM
    ///
    /// 源文档中工序物料的 materialType 字段质量不稳定,历史行为是
    /// 三分支兜底。这里改写为显式 match,避免未来新增类别字符串时
    /// 被无声归入 RM 而无处排查。
    pub fn resolve_process_type(raw: Option<&str>) -> Self {
        match raw {
            Some("PM") => MaterialType::Pm,
            Some("PPM") => MaterialType::Ppm,
            // 默认分支: 缺失或未识别的类别按原料处理
            Some(_) | None => MaterialType::Rm,
        }
    }
}

// ==========================================
// COA 阶段 (COA Stage)
// ==========================================
// COA 记录仅作为 Bulk/Finish 阶段数据存在与否的信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoaStage {
    Bulk,   // 半成品（配制）阶段
    Finish, // 成品阶段
}

impl fmt::Display for CoaStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoaStage::Bulk => write!(f, "BULK"),
            CoaStage::Finish => write!(f, "FINISH"),
        }
    }
}

impl CoaStage {
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "BULK" => Some(CoaStage::Bulk),
            "FINISH" => Some(CoaStage::Finish),
            _ => None,
        }
    }
}

// ==========================================
// 核对区段 (Validation Section)
// ==========================================
// 每个区段对应一类支持数据: Bulk/Finish 查 COA,RM/PPM/PM 查领料单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationSection {
    Bulk,
    Finish,
    #[serde(rename = "RM")]
    Rm,
    #[serde(rename = "PPM")]
    Ppm,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for ValidationSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationSection::Bulk => write!(f, "Bulk"),
            ValidationSection::Finish => write!(f, "Finish"),
            ValidationSection::Rm => write!(f, "RM"),
            ValidationSection::Ppm => write!(f, "PPM"),
            ValidationSection::Pm => write!(f, "PM"),
        }
    }
}

/// 区段的数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSource {
    /// 查 COA 集合（按阶段过滤）
    Coa(CoaStage),
    /// 查领料单集合（按物料类别过滤）
    Requisition(MaterialType),
}

impl ValidationSection {
    /// 从请求参数解析区段（大小写不敏感）
    ///
    /// 无法识别的值返回 None,由 API 层转成显式失败响应,
    /// 绝不静默回退到某个默认区段。
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BULK" => Some(ValidationSection::Bulk),
            "FINISH" => Some(ValidationSection::Finish),
            "RM" => Some(ValidationSection::Rm),
            "PPM" => Some(ValidationSection::Ppm),
            "PM" => Some(ValidationSection::Pm),
            _ => None,
        }
    }

    /// 区段对应的数据来源
    pub fn source(&self) -> SectionSource {
        match self {
            ValidationSection::Bulk => SectionSource::Coa(CoaStage::Bulk),
            ValidationSection::Finish => SectionSource::Coa(CoaStage::Finish),
            ValidationSection::Rm => SectionSource::Requisition(MaterialType::Rm),
            ValidationSection::Ppm => SectionSource::Requisition(MaterialType::Ppm),
            ValidationSection::Pm => SectionSource::Requisition(MaterialType::Pm),
        }
    }

    /// 缺数据提示语模板（逐字固定,前端与导出报表都依赖此文案）
    pub fn missing_data_message(&self, batch_number: &str) -> String {
        match self {
            ValidationSection::Bulk => {
                format!("With batch {}, Bulk data was not available.", batch_number)
            }
            ValidationSection::Finish => {
                format!("With batch {}, Finished Product data was missing.", batch_number)
            }
            ValidationSection::Rm => format!(
                "With batch {}, RM data was not found in the requisition.",
                batch_number
            ),
            ValidationSection::Ppm => {
                format!("With batch {}, PPM details were missing.", batch_number)
            }
            ValidationSection::Pm => {
                format!("With batch {}, PM data was not present.", batch_number)
            }
        }
    }
}

// ==========================================
// 批次量分层 (Batch Tier)
// ==========================================
// 驾驶舱分区用,四层互斥,placebo 判定优先于批次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchTier {
    Main,     // 合格层（批次数 >= 3）
    LowBatch, // 低批次层（1-2）
    NoBatch,  // 无批次层（0）
    Placebo,  // 安慰剂/培养基灌装层（关键词命中,覆盖批次数）
}

impl fmt::Display for BatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchTier::Main => write!(f, "MAIN"),
            BatchTier::LowBatch => write!(f, "LOW_BATCH"),
            BatchTier::NoBatch => write!(f, "NO_BATCH"),
            BatchTier::Placebo => write!(f, "PLACEBO"),
        }
    }
}
