// ==========================================
// 制药生产记录对账系统 - 领域层
// ==========================================
// 职责: 三方源集合的只读实体视图 + 领域枚举
// 红线: 实体全部是请求内临时视图,核心不拥有其持久化生命周期
// ==========================================

pub mod batch;
pub mod coa;
pub mod formula;
pub mod requisition;
pub mod types;

// 重导出领域实体
pub use batch::{BatchEntry, BatchRecord};
pub use coa::CoaRecord;
pub use formula::{FillingDetail, FillingProduct, FormulaRecord, MaterialEntry, ProcessDetail};
pub use requisition::{BatchRequisitionGroup, RequisitionMaterial, RequisitionRecord};
pub use types::{BatchTier, CoaStage, MaterialType, SectionSource, ValidationSection};
