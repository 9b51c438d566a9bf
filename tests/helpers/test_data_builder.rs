// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use mfc_batch_recon::domain::{
    BatchEntry, BatchRecord, BatchRequisitionGroup, CoaRecord, FillingDetail, FillingProduct,
    FormulaRecord, MaterialEntry, ProcessDetail, RequisitionMaterial, RequisitionRecord,
};

// ==========================================
// FormulaRecord 构建器
// ==========================================

pub struct FormulaBuilder {
    record: FormulaRecord,
}

impl FormulaBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: FormulaRecord {
                id: id.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn master_card_no(mut self, no: &str) -> Self {
        self.record.master_card_no = Some(no.to_string());
        self
    }

    pub fn product_name(mut self, name: &str) -> Self {
        self.record.product_name = Some(name.to_string());
        self
    }

    pub fn product_code(mut self, code: &str) -> Self {
        self.record.product_code = Some(code.to_string());
        self
    }

    /// 追加一条只带产品代码的灌装明细
    pub fn filling_code(mut self, code: &str) -> Self {
        self.record.filling_details.push(FillingDetail {
            product_code: Some(code.to_string()),
            packing_materials: Vec::new(),
        });
        self
    }

    /// 追加一条完整灌装明细
    pub fn filling_detail(mut self, code: Option<&str>, packing: Vec<MaterialEntry>) -> Self {
        self.record.filling_details.push(FillingDetail {
            product_code: code.map(|c| c.to_string()),
            packing_materials: packing,
        });
        self
    }

    pub fn material(mut self, code: &str, name: &str) -> Self {
        self.record.materials.push(MaterialEntry::new(code, name));
        self
    }

    pub fn packing_material(mut self, code: &str, name: &str) -> Self {
        self.record
            .packing_materials
            .push(MaterialEntry::new(code, name));
        self
    }

    pub fn process(mut self, process: ProcessDetail) -> Self {
        self.record.processes.push(process);
        self
    }

    pub fn build(self) -> FormulaRecord {
        self.record
    }
}

/// 工序快捷构建
pub fn process_with(
    materials: Vec<MaterialEntry>,
    filling_products: Vec<FillingProduct>,
) -> ProcessDetail {
    ProcessDetail {
        process_name: None,
        materials,
        filling_products,
    }
}

/// 批次文档: 条目为 (itemCode, batchNumber, itemName)
pub fn batch_doc(id: &str, entries: &[(&str, &str, &str)]) -> BatchRecord {
    BatchRecord {
        id: id.to_string(),
        batches: entries
            .iter()
            .map(|(code, batch, name)| BatchEntry::new(code, batch, name))
            .collect(),
    }
}

/// 领料单文档: 每组为 (batchNumber, [(materialCode, materialType)])
pub fn requisition_doc(id: &str, groups: &[(&str, &[(&str, &str)])]) -> RequisitionRecord {
    RequisitionRecord {
        id: id.to_string(),
        batch_groups: groups
            .iter()
            .map(|(batch, materials)| BatchRequisitionGroup {
                batch_number: Some(batch.to_string()),
                materials: materials
                    .iter()
                    .map(|(code, ty)| RequisitionMaterial::new(code, ty))
                    .collect(),
            })
            .collect(),
    }
}

/// COA 记录: (batchNumber, stage)
pub fn coa_doc(batch_number: &str, stage: &str) -> CoaRecord {
    CoaRecord::new(batch_number, stage)
}
